//! Three-way analysis type toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use eco_api::AnalysisType;

const ACTIVE_STYLE: &str = "padding: 4px 12px; border-radius: 4px; font-size: 13px; cursor: pointer; background: #2E7D32; color: white; border: 1px solid #2E7D32;";
const INACTIVE_STYLE: &str = "padding: 4px 12px; border-radius: 4px; font-size: 13px; cursor: pointer; background: white; color: #374151; border: 1px solid #D1D5DB;";

fn toggle_style(active: bool) -> &'static str {
    if active {
        ACTIVE_STYLE
    } else {
        INACTIVE_STYLE
    }
}

/// Mutually exclusive buttons for raw / weighted / trends.
/// Selecting a mode only changes the filter; nothing is fetched until apply.
#[component]
pub fn AnalysisTypeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.filters.read().analysis_type;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            span {
                style: "font-size: 13px; font-weight: 600; color: #374151;",
                "Analysis type"
            }
            div {
                style: "display: flex; gap: 8px;",
                for analysis_type in AnalysisType::ALL {
                    button {
                        key: "{analysis_type}",
                        r#type: "button",
                        style: toggle_style(analysis_type == current),
                        onclick: move |_| {
                            let next = state.filters.read().with_analysis_type(analysis_type);
                            state.filters.set(next);
                        },
                        {analysis_type.label()}
                    }
                }
            }
        }
    }
}
