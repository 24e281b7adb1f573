//! Trend analysis view.

use dioxus::prelude::*;
use eco_api::TrendResult;
use eco_data::trends::trend_panels;

#[derive(Props, Clone, PartialEq)]
pub struct TrendViewProps {
    pub trends: TrendResult,
}

/// One panel per metric listing the backend's trend fields.
#[component]
pub fn TrendView(props: TrendViewProps) -> Element {
    let panels = trend_panels(&props.trends);

    if panels.is_empty() {
        return rsx! {
            p {
                style: "padding: 24px; color: #888; text-align: center;",
                "No trend data. Select \"Trends\" and apply filters."
            }
        };
    }

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 16px;",
            for panel in panels {
                div {
                    key: "{panel.metric}",
                    style: "background: white; padding: 16px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
                    h3 {
                        style: "margin: 0 0 8px 0; font-size: 16px; color: #2E7D32; text-transform: capitalize;",
                        "{panel.metric}"
                    }
                    table {
                        style: "width: 100%; font-size: 13px; border-collapse: collapse;",
                        tbody {
                            for row in panel.rows {
                                tr {
                                    td { style: "padding: 2px 8px 2px 0; color: #666;", "{row.label}" }
                                    td { style: "padding: 2px 0; word-break: break-word;", "{row.value}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
