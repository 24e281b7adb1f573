//! Plain-text rendering of reference data and summary cards for the terminal.

use eco_api::{Location, Metric};
use eco_data::summary::SummaryCard;
use std::fmt::Write;

pub fn format_locations(locations: &[Location]) -> String {
    let mut out = String::new();
    for location in locations {
        let _ = writeln!(out, "{:>6}  {}", location.id, location.label());
    }
    out
}

pub fn format_metrics(metrics: &[Metric]) -> String {
    let mut out = String::new();
    for metric in metrics {
        let unit = metric.unit.as_deref().unwrap_or("-");
        let _ = writeln!(out, "{:<16} {:<24} {}", metric.name, metric.label(), unit);
    }
    out
}

/// Same numbers and formatting as the dashboard's summary cards.
pub fn format_summary_cards(cards: &[SummaryCard]) -> String {
    let mut out = String::new();
    for card in cards {
        match card.unit.as_deref() {
            Some(unit) => {
                let _ = writeln!(out, "{} ({})", card.metric, unit);
            }
            None => {
                let _ = writeln!(out, "{}", card.metric);
            }
        }
        let _ = writeln!(out, "  min {}  avg {}  max {}", card.min, card.avg, card.max);
        if let Some(weighted) = card.weighted_avg.as_deref() {
            let _ = writeln!(out, "  weighted avg {}", weighted);
        }
        let shares: Vec<String> = card
            .quality
            .iter()
            .map(|share| format!("{} {}", share.level, share.percent))
            .collect();
        let _ = writeln!(out, "  quality: {}", shares.join("  "));
    }
    out
}
