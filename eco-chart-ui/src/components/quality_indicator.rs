//! Quality indicator: share of records per tier and their mean confidence weight.

use dioxus::prelude::*;
use eco_api::{ClimateRecord, QualityLevel};
use eco_data::series::QualityCounts;
use eco_data::summary::format_percent;

#[derive(Props, Clone, PartialEq)]
pub struct QualityIndicatorProps {
    pub records: Vec<ClimateRecord>,
}

#[component]
pub fn QualityIndicator(props: QualityIndicatorProps) -> Element {
    let counts = QualityCounts::from_records(&props.records);
    let total = counts.total();
    let confidence = format_percent(counts.mean_weight());
    let dominant = counts
        .dominant()
        .map(|level| level.label())
        .unwrap_or("-");
    let rows: Vec<(QualityLevel, usize, f64)> = QualityLevel::ALL
        .iter()
        .map(|&level| {
            (
                level,
                counts.count(level),
                counts.share(level).unwrap_or(0.0) * 100.0,
            )
        })
        .collect();

    rsx! {
        div {
            style: "margin-top: 24px; background: white; padding: 16px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px; color: #2E7D32;",
                "Data Quality"
            }
            if total == 0 {
                p {
                    style: "margin: 0; font-size: 13px; color: #888;",
                    "No records loaded."
                }
            } else {
                p {
                    style: "margin: 0 0 8px 0; font-size: 13px; color: #374151;",
                    "{total} records, mostly {dominant}. Average confidence weight: {confidence}"
                }
                for (level, count, percent) in rows {
                    div {
                        key: "{level}",
                        style: "display: flex; align-items: center; gap: 8px; margin: 4px 0; font-size: 12px;",
                        span {
                            style: "width: 96px;",
                            {level.label()}
                        }
                        div {
                            style: "flex: 1; height: 8px; background: #F3F4F6; border-radius: 4px;",
                            div {
                                style: format!(
                                    "width: {:.1}%; height: 100%; background: {}; border-radius: 4px;",
                                    percent,
                                    level.color()
                                ),
                            }
                        }
                        span {
                            style: "width: 64px; text-align: right;",
                            "{count}"
                        }
                    }
                }
            }
        }
    }
}
