//! Result-view selection.
//!
//! The view on screen is a pure function of the currently selected analysis
//! type and the last stored result. Changing the toggle without applying
//! switches the view immediately; if the stored result was fetched for a
//! different mode, the selected view renders empty rather than stale data
//! from another mode.
//!
//! Responses are not generation-checked: when two applies overlap, whichever
//! response resolves last becomes the stored result. Selection stays
//! consistent regardless, since it only ever pairs a mode with its own data.

use crate::summary::{summary_cards, SummaryCard};
use eco_api::{AnalysisResult, AnalysisType, ClimateRecord, TrendResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Line chart, quality bar chart and quality indicator over the same records.
    Raw(Vec<ClimateRecord>),
    /// One card per metric.
    Weighted(Vec<SummaryCard>),
    /// One trend panel per metric.
    Trends(TrendResult),
}

impl ResultView {
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            ResultView::Raw(_) => AnalysisType::Raw,
            ResultView::Weighted(_) => AnalysisType::Weighted,
            ResultView::Trends(_) => AnalysisType::Trends,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ResultView::Raw(records) => records.is_empty(),
            ResultView::Weighted(cards) => cards.is_empty(),
            ResultView::Trends(trends) => trends.is_empty(),
        }
    }
}

pub fn select_view(analysis_type: AnalysisType, result: Option<&AnalysisResult>) -> ResultView {
    match analysis_type {
        AnalysisType::Raw => match result {
            Some(AnalysisResult::Raw(records)) => ResultView::Raw(records.clone()),
            _ => ResultView::Raw(Vec::new()),
        },
        AnalysisType::Weighted => match result {
            Some(AnalysisResult::Weighted(summary)) => ResultView::Weighted(summary_cards(summary)),
            _ => ResultView::Weighted(Vec::new()),
        },
        AnalysisType::Trends => match result {
            Some(AnalysisResult::Trends(trends)) => ResultView::Trends(trends.clone()),
            _ => ResultView::Trends(TrendResult::new()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_api::Summary;
    use serde_json::json;

    fn raw_result() -> AnalysisResult {
        AnalysisResult::Raw(vec![ClimateRecord(json!({"date": "2024-01-01", "value": 1}))])
    }

    fn trends_result() -> AnalysisResult {
        let mut trends = TrendResult::new();
        trends.insert("co2".to_string(), json!({"direction": "increasing"}));
        AnalysisResult::Trends(trends)
    }

    #[test]
    fn nothing_fetched_yields_empty_view_for_selected_mode() {
        for analysis_type in AnalysisType::ALL {
            let view = select_view(analysis_type, None);
            assert_eq!(view.analysis_type(), analysis_type);
            assert!(view.is_empty());
        }
    }

    #[test]
    fn matching_result_is_shown() {
        let view = select_view(AnalysisType::Trends, Some(&trends_result()));
        match view {
            ResultView::Trends(trends) => assert_eq!(trends["co2"]["direction"], "increasing"),
            other => panic!("expected trends view, got {other:?}"),
        }
    }

    #[test]
    fn toggling_mode_without_apply_never_shows_other_modes_data() {
        let stored = raw_result();
        let weighted = select_view(AnalysisType::Weighted, Some(&stored));
        assert_eq!(weighted, ResultView::Weighted(Vec::new()));
        let trends = select_view(AnalysisType::Trends, Some(&stored));
        assert_eq!(trends, ResultView::Trends(TrendResult::new()));
        // Toggling back shows the held raw records again.
        let raw = select_view(AnalysisType::Raw, Some(&stored));
        assert!(!raw.is_empty());
    }

    #[test]
    fn overlapping_applies_follow_the_current_selection() {
        // Two applies were issued (raw, then trends); the raw response
        // resolved last and is what is stored. The selection is trends.
        let last_resolved = raw_result();
        let view = select_view(AnalysisType::Trends, Some(&last_resolved));
        assert_eq!(view.analysis_type(), AnalysisType::Trends);
        assert!(view.is_empty());
    }

    #[test]
    fn weighted_result_becomes_cards() {
        let summary: Summary = serde_json::from_value(json!({
            "co2": {"unit": "ppm", "min": 400, "avg": 410.5, "max": 420}
        }))
        .unwrap();
        let view = select_view(AnalysisType::Weighted, Some(&AnalysisResult::Weighted(summary)));
        match view {
            ResultView::Weighted(cards) => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].metric, "co2");
                assert_eq!(cards[0].avg, "410.5");
            }
            other => panic!("expected weighted view, got {other:?}"),
        }
    }
}
