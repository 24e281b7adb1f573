//! Weighted-summary cards.

use eco_api::{QualityLevel, Summary};

/// One quality bucket of a card, already formatted as a percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityShare {
    pub level: QualityLevel,
    pub percent: String,
}

/// Display-ready statistics for one metric of the weighted summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub metric: String,
    pub unit: Option<String>,
    pub min: String,
    pub avg: String,
    pub max: String,
    /// Only present when the backend sent a weighted average.
    pub weighted_avg: Option<String>,
    /// Always four buckets, best tier first.
    pub quality: Vec<QualityShare>,
}

/// One decimal place, or `-` when the value is missing.
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

/// A fraction in [0, 1] as a percentage with one decimal place, or `-`.
pub fn format_percent(fraction: Option<f64>) -> String {
    match fraction {
        Some(f) => format!("{:.1}%", f * 100.0),
        None => "-".to_string(),
    }
}

/// One card per metric, in metric-name order.
pub fn summary_cards(summary: &Summary) -> Vec<SummaryCard> {
    summary
        .iter()
        .map(|(metric, stats)| SummaryCard {
            metric: metric.clone(),
            unit: stats.unit.clone().filter(|u| !u.is_empty()),
            min: format_stat(stats.min),
            avg: format_stat(stats.avg),
            max: format_stat(stats.max),
            weighted_avg: stats.weighted_avg.map(|w| format_stat(Some(w))),
            quality: QualityLevel::ALL
                .iter()
                .map(|&level| QualityShare {
                    level,
                    percent: format_percent(
                        stats
                            .quality_distribution
                            .as_ref()
                            .and_then(|d| d.get(level)),
                    ),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn co2_summary() -> Summary {
        serde_json::from_value(json!({
            "co2": {
                "unit": "ppm",
                "min": 400,
                "avg": 410.5,
                "max": 420,
                "quality_distribution": {
                    "excellent": 0.5,
                    "good": 0.3,
                    "questionable": 0.1,
                    "poor": 0.1
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn co2_card_matches_backend_payload() {
        let cards = summary_cards(&co2_summary());
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.metric, "co2");
        assert_eq!(card.unit.as_deref(), Some("ppm"));
        assert_eq!(card.min, "400.0");
        assert_eq!(card.avg, "410.5");
        assert_eq!(card.max, "420.0");
        assert_eq!(card.weighted_avg, None);
        let percents: Vec<&str> = card.quality.iter().map(|q| q.percent.as_str()).collect();
        assert_eq!(percents, vec!["50.0%", "30.0%", "10.0%", "10.0%"]);
        let levels: Vec<QualityLevel> = card.quality.iter().map(|q| q.level).collect();
        assert_eq!(levels, QualityLevel::ALL.to_vec());
    }

    #[test]
    fn weighted_average_is_shown_when_present() {
        let summary: Summary = serde_json::from_value(json!({
            "temperature": {"unit": "celsius", "min": -2.04, "avg": 14.26, "max": 31.0, "weighted_avg": 14.55}
        }))
        .unwrap();
        let card = &summary_cards(&summary)[0];
        assert_eq!(card.min, "-2.0");
        assert_eq!(card.avg, "14.3");
        assert_eq!(card.weighted_avg.as_deref(), Some("14.6"));
    }

    #[test]
    fn missing_values_render_as_dash() {
        let summary: Summary = serde_json::from_value(json!({
            "humidity": {"avg": null, "quality_distribution": {"excellent": 1.0, "good": null}}
        }))
        .unwrap();
        let card = &summary_cards(&summary)[0];
        assert_eq!(card.unit, None);
        assert_eq!(card.min, "-");
        assert_eq!(card.avg, "-");
        let percents: Vec<&str> = card.quality.iter().map(|q| q.percent.as_str()).collect();
        assert_eq!(percents, vec!["100.0%", "-", "-", "-"]);
    }

    #[test]
    fn cards_follow_metric_name_order() {
        let summary: Summary = serde_json::from_value(json!({
            "temperature": {}, "co2": {}, "precipitation": {}
        }))
        .unwrap();
        let names: Vec<String> = summary_cards(&summary).into_iter().map(|c| c.metric).collect();
        assert_eq!(names, vec!["co2", "precipitation", "temperature"]);
    }

    #[test]
    fn format_helpers() {
        assert_eq!(format_stat(Some(0.0)), "0.0");
        assert_eq!(format_stat(None), "-");
        assert_eq!(format_percent(Some(0.123)), "12.3%");
        assert_eq!(format_percent(None), "-");
    }
}
