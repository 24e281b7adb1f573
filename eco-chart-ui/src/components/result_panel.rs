//! Active result view, chosen by the selected analysis type.

use super::{LoadingSpinner, RawCharts, SummaryCards, TrendView};
use crate::state::AppState;
use dioxus::prelude::*;
use eco_data::view::ResultView;

/// Renders the view for the currently selected mode, or the loading
/// placeholder while an apply is in flight.
#[component]
pub fn ResultPanel() -> Element {
    let state = use_context::<AppState>();
    let loading = (state.loading)();
    let analysis_type = state.filters.read().analysis_type;

    let body = if loading {
        rsx! { LoadingSpinner { analysis_type } }
    } else {
        match state.current_view() {
            ResultView::Raw(_) => rsx! { RawCharts {} },
            ResultView::Weighted(cards) => rsx! { SummaryCards { cards } },
            ResultView::Trends(trends) => rsx! { TrendView { trends } },
        }
    };

    rsx! {
        div {
            style: "margin-top: 24px;",
            {body}
        }
    }
}
