//! White card holding one D3 chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    pub title: String,
    /// Axis or unit note shown under the title; hidden when empty.
    #[props(default)]
    pub caption: String,
    /// DOM id the D3 script renders into.
    pub chart_id: String,
    #[props(default = 320)]
    pub min_height: u32,
}

#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let plot_style = format!("min-height: {}px; width: 100%; position: relative;", props.min_height);

    rsx! {
        section {
            style: "background: white; padding: 16px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
            h3 {
                style: "margin: 0; font-size: 16px; color: #2E7D32;",
                {props.title.clone()}
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #6B7280;",
                    {props.caption.clone()}
                }
            }
            div {
                id: "{props.chart_id}",
                style: "{plot_style}",
            }
        }
    }
}
