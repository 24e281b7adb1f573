//! Quality threshold selector.

use crate::state::AppState;
use dioxus::prelude::*;
use eco_api::{FilterField, QualityLevel};

/// Dropdown for the minimum quality tier ("Any quality" clears it).
#[component]
pub fn QualitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.filters.read().quality_threshold;

    let on_change = move |evt: Event<FormData>| {
        let next = state
            .filters
            .read()
            .with(FilterField::QualityThreshold, &evt.value());
        state.filters.set(next);
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "quality-select",
                style: "font-size: 13px; font-weight: 600; color: #374151;",
                "Quality threshold"
            }
            select {
                id: "quality-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: current.is_none(),
                    "Any quality"
                }
                for level in QualityLevel::ALL {
                    option {
                        value: level.as_str(),
                        selected: current == Some(level),
                        {level.label()}
                    }
                }
            }
        }
    }
}
