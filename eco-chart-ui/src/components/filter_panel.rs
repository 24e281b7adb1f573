//! Filter panel: every filter control plus the apply/clear actions.

use super::{AnalysisTypeToggle, DateRangePicker, LocationSelector, MetricSelector, QualitySelector};
use crate::state::AppState;
use dioxus::prelude::*;
use eco_api::Filter;

#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    /// Called on "Apply filters"; the controller reads the current filter itself.
    pub on_apply: EventHandler<()>,
}

/// Controlled view over the controller's filter state. Holds no local draft:
/// each control writes a new `Filter` straight back to `AppState`.
#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "background: white; padding: 16px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
            h2 {
                style: "margin: 0 0 12px 0; font-size: 18px; color: #2E7D32;",
                "Filter Data"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",
                LocationSelector {}
                MetricSelector {}
                QualitySelector {}
                DateRangePicker {}
                AnalysisTypeToggle {}
            }
            div {
                style: "margin-top: 16px; display: flex; gap: 8px;",
                button {
                    r#type: "button",
                    style: "padding: 8px 16px; border-radius: 4px; border: none; background: #2E7D32; color: white; cursor: pointer;",
                    onclick: move |_| props.on_apply.call(()),
                    "Apply filters"
                }
                button {
                    r#type: "button",
                    style: "padding: 8px 16px; border-radius: 4px; border: 1px solid #D1D5DB; background: white; color: #374151; cursor: pointer;",
                    onclick: move |_| state.filters.set(Filter::default()),
                    "Clear"
                }
            }
        }
    }
}
