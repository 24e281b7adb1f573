//! EcoVision: Climate Visualizer
//!
//! Root controller of the dashboard. Owns the filter and result state,
//! loads the reference lists once, and runs one analysis fetch per
//! "Apply filters" click.
//!
//! Data flow:
//! 1. On mount: fetch locations and metrics concurrently, and initialize the
//!    D3 chart scripts.
//! 2. Filter edits replace `AppState::filters`; nothing is fetched.
//! 3. On apply: fetch the analysis for the selected mode and store it as the
//!    single `AnalysisResult`.
//! 4. `ResultPanel` renders the view for the selected mode from that result.

use dioxus::prelude::*;
use eco_api::{apply, load_reference_data, settle, ApiClient, DEFAULT_BASE_URL};
use eco_chart_ui::components::{FilterPanel, ResultPanel};
use eco_chart_ui::js_bridge;
use eco_chart_ui::state::AppState;

/// Backend base URL, overridable at build time with `ECO_API_BASE_URL`.
const API_BASE_URL: &str = match option_env!("ECO_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_BASE_URL,
};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("eco-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_context_provider(|| ApiClient::new(API_BASE_URL));

    // ─── Effect: load reference data once on mount ───
    // The task belongs to this component's scope, so it is cancelled (and
    // never writes state) if the component is torn down before both lists
    // arrive. Failures are logged and leave the lists empty.
    let bootstrap_client = client.clone();
    use_effect(move || {
        let client = bootstrap_client.clone();
        js_bridge::init_charts();
        spawn(async move {
            match load_reference_data(&client).await {
                Ok((locations, metrics)) => {
                    state.locations.set(locations);
                    state.metrics.set(metrics);
                }
                Err(e) => log::error!("Failed to load reference data: {}", e),
            }
        });
    });

    // ─── Apply: one fetch for the selected mode ───
    // Not cancelled when re-applied: an earlier response that resolves later
    // still overwrites the stored result.
    let on_apply = move |_: ()| {
        let filter = state.filters.read().clone();
        let client = client.clone();
        spawn(async move {
            let outcome = apply(&client, &filter, |busy| state.loading.set(busy)).await;
            let previous = state.result.peek().clone();
            state.result.set(settle(previous, outcome));
        });
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 32px 16px; font-family: system-ui, -apple-system, sans-serif; background: #F9FAFB;",
            header {
                style: "margin-bottom: 32px; text-align: center;",
                h1 {
                    style: "margin: 0 0 8px 0; font-size: 36px; color: #2E7D32;",
                    "EcoVision: Climate Visualizer"
                }
                p {
                    style: "margin: 0; color: #6B7280; font-style: italic;",
                    "Transforming climate data into actionable insights for a sustainable future"
                }
            }

            FilterPanel { on_apply: on_apply }

            ResultPanel {}
        }
    }
}
