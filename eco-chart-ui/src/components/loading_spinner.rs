//! Placeholder shown instead of any result view while an apply is in flight.

use dioxus::prelude::*;
use eco_api::AnalysisType;

#[component]
pub fn LoadingSpinner(analysis_type: AnalysisType) -> Element {
    let message = match analysis_type {
        AnalysisType::Raw => "Fetching climate records...",
        AnalysisType::Weighted => "Computing weighted summary...",
        AnalysisType::Trends => "Analyzing trends...",
    };

    rsx! {
        div {
            role: "status",
            style: "display: flex; flex-direction: column; align-items: center; gap: 12px; padding: 48px; color: #6B7280;",
            div {
                style: "width: 28px; height: 28px; border: 3px solid #C8E6C9; border-top-color: #2E7D32; border-radius: 50%; animation: eco-spin 0.8s linear infinite;",
            }
            style { "@keyframes eco-spin {{ to {{ transform: rotate(360deg); }} }}" }
            span { {message} }
        }
    }
}
