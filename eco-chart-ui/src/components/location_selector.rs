//! Dropdown selector for choosing a location.

use crate::state::AppState;
use dioxus::prelude::*;
use eco_api::FilterField;

/// Location dropdown selector.
/// Reads reference locations from AppState and replaces the filter on change.
#[component]
pub fn LocationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let locations = state.locations.read().clone();
    let selected = state.filters.read().location_id.clone().unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        let next = state.filters.read().with(FilterField::LocationId, &evt.value());
        state.filters.set(next);
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "location-select",
                style: "font-size: 13px; font-weight: 600; color: #374151;",
                "Location"
            }
            select {
                id: "location-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All locations"
                }
                for location in locations.iter() {
                    option {
                        value: "{location.id}",
                        selected: location.id == selected,
                        {location.label()}
                    }
                }
            }
        }
    }
}
