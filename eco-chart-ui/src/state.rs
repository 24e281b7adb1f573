//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use eco_api::{AnalysisResult, Filter, Location, Metric};
use eco_data::view::{select_view, ResultView};

/// Controller-owned state of the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current filter; replaced wholesale on every control edit
    pub filters: Signal<Filter>,
    /// Reference locations (empty until the bootstrap load succeeds)
    pub locations: Signal<Vec<Location>>,
    /// Reference metrics (empty until the bootstrap load succeeds)
    pub metrics: Signal<Vec<Metric>>,
    /// Result of the last successful apply, tagged with its mode
    pub result: Signal<Option<AnalysisResult>>,
    /// True while an apply request is in flight
    pub loading: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            filters: Signal::new(Filter::default()),
            locations: Signal::new(Vec::new()),
            metrics: Signal::new(Vec::new()),
            result: Signal::new(None),
            loading: Signal::new(false),
        }
    }

    /// The view for the currently selected mode. Reads (and so subscribes to)
    /// the filter and result signals.
    pub fn current_view(&self) -> ResultView {
        let analysis_type = self.filters.read().analysis_type;
        select_view(analysis_type, self.result.read().as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
