//! Raw-series view: trend line chart, quality bar chart and quality indicator.

use super::{ChartCard, QualityIndicator};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use eco_api::ClimateRecord;
use eco_data::series::{line_series, QualityCounts};
use eco_data::view::ResultView;
use std::collections::BTreeSet;

/// DOM ids for the D3 chart containers.
const LINE_CHART_ID: &str = "climate-trend-chart";
const BAR_CHART_ID: &str = "quality-distribution-chart";

fn raw_records(view: ResultView) -> Vec<ClimateRecord> {
    match view {
        ResultView::Raw(records) => records,
        _ => Vec::new(),
    }
}

/// Y-axis caption: "metric (unit)" when the records hold a single metric.
fn y_axis_label(records: &[ClimateRecord]) -> String {
    let metrics: BTreeSet<String> = records.iter().filter_map(|r| r.metric()).collect();
    if metrics.len() != 1 {
        return "Value".to_string();
    }
    let metric = metrics.into_iter().next().unwrap_or_default();
    match records.iter().find_map(|r| r.unit()) {
        Some(unit) => format!("{} ({})", metric, unit),
        None => metric,
    }
}

/// Both charts and the indicator are fed the same record list.
#[component]
pub fn RawCharts() -> Element {
    let state = use_context::<AppState>();
    let records = raw_records(state.current_view());
    let caption = y_axis_label(&records);

    // Re-render the D3 charts whenever the filter mode or stored result changes.
    use_effect(move || {
        let records = raw_records(state.current_view());
        if records.is_empty() {
            js_bridge::destroy_chart(LINE_CHART_ID);
            js_bridge::destroy_chart(BAR_CHART_ID);
            return;
        }

        let points = line_series(&records);
        let bars = QualityCounts::from_records(&records).bars();
        log::debug!(
            "Rendering {} line points and {} quality bars",
            points.len(),
            bars.len()
        );

        let line_json = serde_json::to_string(&points).unwrap_or_default();
        let line_config = serde_json::json!({
            "title": "Climate Trends",
            "yAxisLabel": y_axis_label(&records),
            "height": 320,
        })
        .to_string();
        js_bridge::render_line_chart(LINE_CHART_ID, &line_json, &line_config);

        let bar_json = serde_json::to_string(&bars).unwrap_or_default();
        let bar_config = serde_json::json!({
            "title": "Quality Distribution",
            "height": 320,
        })
        .to_string();
        js_bridge::render_bar_chart(BAR_CHART_ID, &bar_json, &bar_config);
    });

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 24px;",
            ChartCard {
                title: "Climate Trends".to_string(),
                caption: caption,
                chart_id: LINE_CHART_ID.to_string(),
            }
            ChartCard {
                title: "Quality Distribution".to_string(),
                caption: "Records per quality tier".to_string(),
                chart_id: BAR_CHART_ID.to_string(),
            }
        }
        QualityIndicator { records: records }
    }
}
