//! Weighted summary: one card per metric.

use dioxus::prelude::*;
use eco_data::summary::SummaryCard;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryCardsProps {
    pub cards: Vec<SummaryCard>,
}

#[component]
pub fn SummaryCards(props: SummaryCardsProps) -> Element {
    if props.cards.is_empty() {
        return rsx! {
            p {
                style: "padding: 24px; color: #888; text-align: center;",
                "No summary data. Select \"Weighted summary\" and apply filters."
            }
        };
    }

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 16px;",
            for card in props.cards.iter() {
                div {
                    key: "{card.metric}",
                    style: "background: white; padding: 16px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
                    h3 {
                        style: "margin: 0 0 4px 0; font-size: 16px; color: #2E7D32; text-transform: capitalize;",
                        "{card.metric}"
                    }
                    if let Some(unit) = card.unit.as_ref() {
                        p {
                            style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                            "Unit: {unit}"
                        }
                    }
                    div {
                        style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; font-size: 13px;",
                        div { strong { "Min" } p { style: "margin: 0;", "{card.min}" } }
                        div { strong { "Avg" } p { style: "margin: 0;", "{card.avg}" } }
                        div { strong { "Max" } p { style: "margin: 0;", "{card.max}" } }
                    }
                    if let Some(weighted) = card.weighted_avg.as_ref() {
                        p {
                            style: "margin: 8px 0 0 0; font-size: 13px;",
                            strong { "Weighted avg: " }
                            "{weighted}"
                        }
                    }
                    div {
                        style: "margin-top: 12px; font-size: 12px;",
                        strong { "Quality distribution" }
                        for share in card.quality.iter() {
                            div {
                                key: "{share.level}",
                                style: "display: flex; justify-content: space-between;",
                                span { {share.level.label()} }
                                span { "{share.percent}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
