//! Dropdown selector for choosing a metric.

use crate::state::AppState;
use dioxus::prelude::*;
use eco_api::FilterField;

/// Metric dropdown selector, labelled by display name when the backend has one.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let metrics = state.metrics.read().clone();
    let selected = state.filters.read().metric.clone().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        let next = state.filters.read().with(FilterField::Metric, &evt.value());
        state.filters.set(next);
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "metric-select",
                style: "font-size: 13px; font-weight: 600; color: #374151;",
                "Metric"
            }
            select {
                id: "metric-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All metrics"
                }
                for metric in metrics.iter() {
                    option {
                        value: "{metric.name}",
                        selected: metric.name == selected,
                        {metric.label().to_string()}
                    }
                }
            }
        }
    }
}
