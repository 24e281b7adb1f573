//! Date range picker with start and end date inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use eco_api::FilterField;
use eco_data::bounds::DateBounds;
use eco_utils::dates::format_optional_date;

/// Start/end date inputs bound to the filter.
///
/// The start input's `max` is the selected end date and the end input's `min`
/// is the selected start date, so the browser picker cannot produce an
/// inverted range. A value outside those bounds that still reaches the change
/// handler is ignored; an inverted range already in the filter only shows a hint.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let filters = state.filters.read().clone();
    let start = format_optional_date(filters.start_date.as_ref());
    let end = format_optional_date(filters.end_date.as_ref());
    let bounds = DateBounds::for_filter(&filters);
    let start_max = bounds.start_max_attr();
    let end_min = bounds.end_min_attr();
    let inverted = !filters.has_ordered_dates();

    let mut pick = move |field: FilterField, value: String| {
        let current = state.filters.read().clone();
        if !DateBounds::for_filter(&current).accepts(field, &value) {
            log::debug!("Ignoring out-of-range {:?} value {}", field, value);
            return;
        }
        state.filters.set(current.with(field, &value));
    };

    let on_start_change = move |evt: Event<FormData>| pick(FilterField::StartDate, evt.value());
    let on_end_change = move |evt: Event<FormData>| pick(FilterField::EndDate, evt.value());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                style: "font-size: 13px; font-weight: 600; color: #374151;",
                "Start date"
                input {
                    r#type: "date",
                    value: "{start}",
                    max: "{start_max}",
                    placeholder: "YYYY-MM-DD",
                    style: "display: block; width: 100%;",
                    onchange: on_start_change,
                }
            }
        }
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                style: "font-size: 13px; font-weight: 600; color: #374151;",
                "End date"
                input {
                    r#type: "date",
                    value: "{end}",
                    min: "{end_min}",
                    placeholder: "YYYY-MM-DD",
                    style: "display: block; width: 100%;",
                    onchange: on_end_change,
                }
            }
            if inverted {
                span {
                    style: "font-size: 11px; color: #B45309;",
                    "Start date is after end date."
                }
            }
        }
    }
}
