//! Filter state edited by the dashboard and sent to the backend as query parameters.

use crate::quality::QualityLevel;
use chrono::NaiveDate;
use eco_utils::dates::{format_date, is_ordered, parse_optional_date};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Throwaway origin used only to borrow `Url`'s form-urlencoded serializer.
const QUERY_ORIGIN: &str = "http://localhost/";

/// Which analysis the next "apply" fetches and which result view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    #[default]
    Raw,
    Weighted,
    Trends,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown analysis type: {0}")]
pub struct UnknownAnalysisType(pub String);

impl AnalysisType {
    /// Toggle order in the filter panel.
    pub const ALL: [AnalysisType; 3] = [
        AnalysisType::Raw,
        AnalysisType::Weighted,
        AnalysisType::Trends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Raw => "raw",
            AnalysisType::Weighted => "weighted",
            AnalysisType::Trends => "trends",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisType::Raw => "Raw",
            AnalysisType::Weighted => "Weighted summary",
            AnalysisType::Trends => "Trends",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisType {
    type Err = UnknownAnalysisType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "raw" => Ok(AnalysisType::Raw),
            "weighted" => Ok(AnalysisType::Weighted),
            "trends" => Ok(AnalysisType::Trends),
            other => Err(UnknownAnalysisType(other.to_string())),
        }
    }
}

/// One editable control of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    LocationId,
    StartDate,
    EndDate,
    Metric,
    QualityThreshold,
    AnalysisType,
}

/// The user's filter selection.
///
/// `Filter::default()` is the cleared state: no location, metric, dates or
/// quality threshold, and the raw analysis mode. A filter is never edited in
/// place by the UI; every control change builds a new value with [`Filter::with`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Filter {
    pub location_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub metric: Option<String>,
    pub quality_threshold: Option<QualityLevel>,
    pub analysis_type: AnalysisType,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl Filter {
    /// Return a copy of this filter with a single field replaced by the raw
    /// control value. An empty value clears the field. Values that do not parse
    /// (a malformed date, an unknown quality tier) also clear it, except for
    /// the analysis type, which keeps its current mode.
    pub fn with(&self, field: FilterField, value: &str) -> Filter {
        let mut next = self.clone();
        match field {
            FilterField::LocationId => next.location_id = non_empty(value),
            FilterField::StartDate => next.start_date = parse_optional_date(value),
            FilterField::EndDate => next.end_date = parse_optional_date(value),
            FilterField::Metric => next.metric = non_empty(value),
            FilterField::QualityThreshold => next.quality_threshold = value.parse().ok(),
            FilterField::AnalysisType => {
                if let Ok(analysis_type) = value.parse() {
                    next.analysis_type = analysis_type;
                }
            }
        }
        next
    }

    /// Copy of this filter in another analysis mode.
    pub fn with_analysis_type(&self, analysis_type: AnalysisType) -> Filter {
        Filter {
            analysis_type,
            ..self.clone()
        }
    }

    /// Present, non-empty fields under their snake_case wire names.
    /// `analysis_type` only selects the endpoint and is never sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(location_id) = self.location_id.as_deref().and_then(non_empty) {
            pairs.push(("location_id", location_id));
        }
        if let Some(start) = &self.start_date {
            pairs.push(("start_date", format_date(start)));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("end_date", format_date(end)));
        }
        if let Some(metric) = self.metric.as_deref().and_then(non_empty) {
            pairs.push(("metric", metric));
        }
        if let Some(quality) = &self.quality_threshold {
            pairs.push(("quality_threshold", quality.as_str().to_string()));
        }
        pairs
    }

    /// Form-urlencoded query string without the leading `?`; empty when no
    /// field is set.
    pub fn build_query(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        Url::parse_with_params(QUERY_ORIGIN, &pairs)
            .ok()
            .and_then(|url| url.query().map(str::to_owned))
            .unwrap_or_default()
    }

    /// False when both dates are set and the start falls after the end.
    /// Only drives a UI hint; such a filter is still sent as-is.
    pub fn has_ordered_dates(&self) -> bool {
        is_ordered(self.start_date.as_ref(), self.end_date.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_filter_builds_empty_query() {
        let filter = Filter::default();
        assert_eq!(filter.analysis_type, AnalysisType::Raw);
        assert_eq!(filter.build_query(), "");
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn analysis_type_alone_is_not_sent() {
        let filter = Filter::default().with_analysis_type(AnalysisType::Trends);
        assert_eq!(filter.build_query(), "");
    }

    #[test]
    fn full_filter_uses_snake_case_names_in_order() {
        let filter = Filter {
            location_id: Some("3".to_string()),
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 6, 30)),
            metric: Some("temperature".to_string()),
            quality_threshold: Some(QualityLevel::Good),
            analysis_type: AnalysisType::Weighted,
        };
        assert_eq!(
            filter.build_query(),
            "location_id=3&start_date=2024-01-01&end_date=2024-06-30&metric=temperature&quality_threshold=good"
        );
    }

    #[test]
    fn subset_of_fields_emits_only_present_keys() {
        let filter = Filter {
            metric: Some("co2".to_string()),
            end_date: Some(date(2023, 12, 31)),
            ..Filter::default()
        };
        let keys: Vec<&str> = filter.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["end_date", "metric"]);
        assert_eq!(filter.build_query(), "end_date=2023-12-31&metric=co2");
    }

    #[test]
    fn empty_strings_are_omitted() {
        let filter = Filter {
            location_id: Some(String::new()),
            metric: Some(String::new()),
            ..Filter::default()
        };
        assert_eq!(filter.build_query(), "");
    }

    #[test]
    fn values_are_url_encoded() {
        let filter = Filter {
            metric: Some("rain & snow/mm".to_string()),
            ..Filter::default()
        };
        assert_eq!(filter.build_query(), "metric=rain+%26+snow%2Fmm");
    }

    #[test]
    fn with_replaces_a_single_field() {
        let base = Filter {
            metric: Some("humidity".to_string()),
            ..Filter::default()
        };
        let next = base.with(FilterField::LocationId, "7");
        assert_eq!(next.location_id.as_deref(), Some("7"));
        assert_eq!(next.metric.as_deref(), Some("humidity"));
        // The original value is untouched.
        assert_eq!(base.location_id, None);
    }

    #[test]
    fn with_empty_value_clears_field() {
        let base = Filter::default()
            .with(FilterField::StartDate, "2024-03-01")
            .with(FilterField::QualityThreshold, "excellent");
        assert_eq!(base.start_date, Some(date(2024, 3, 1)));
        assert_eq!(base.quality_threshold, Some(QualityLevel::Excellent));

        let cleared = base
            .with(FilterField::StartDate, "")
            .with(FilterField::QualityThreshold, "");
        assert_eq!(cleared.start_date, None);
        assert_eq!(cleared.quality_threshold, None);
    }

    #[test]
    fn with_unknown_analysis_type_keeps_current_mode() {
        let base = Filter::default().with(FilterField::AnalysisType, "trends");
        assert_eq!(base.analysis_type, AnalysisType::Trends);
        let next = base.with(FilterField::AnalysisType, "bogus");
        assert_eq!(next.analysis_type, AnalysisType::Trends);
    }

    #[test]
    fn date_order_is_a_hint_only() {
        let filter = Filter::default()
            .with(FilterField::StartDate, "2024-05-01")
            .with(FilterField::EndDate, "2024-04-01");
        assert!(!filter.has_ordered_dates());
        // Out-of-order dates are still sent unchanged.
        assert_eq!(filter.build_query(), "start_date=2024-05-01&end_date=2024-04-01");
    }

    #[test]
    fn analysis_type_round_trips_through_str() {
        for analysis_type in AnalysisType::ALL {
            assert_eq!(analysis_type.as_str().parse::<AnalysisType>().unwrap(), analysis_type);
        }
    }
}
