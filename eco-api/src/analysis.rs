//! Analysis dispatch: one fetch per apply, one result value per mode.

use crate::client::ApiClient;
use crate::error::Result;
use crate::filter::{AnalysisType, Filter};
use crate::models::{ClimateRecord, Location, Metric, Summary, TrendResult};
use futures_util::future::try_join;
use log::{error, info};

/// The payload of the last successful apply, tagged with the mode it was
/// fetched for. Holding one value instead of a slot per mode means a result
/// can never be shown under the wrong mode.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Raw(Vec<ClimateRecord>),
    Weighted(Summary),
    Trends(TrendResult),
}

impl AnalysisResult {
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            AnalysisResult::Raw(_) => AnalysisType::Raw,
            AnalysisResult::Weighted(_) => AnalysisType::Weighted,
            AnalysisResult::Trends(_) => AnalysisType::Trends,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnalysisResult::Raw(records) => records.len(),
            AnalysisResult::Weighted(summary) => summary.len(),
            AnalysisResult::Trends(trends) => trends.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fetch the analysis selected by `filter.analysis_type`. Exactly one
/// request is issued.
pub async fn fetch_analysis(client: &ApiClient, filter: &Filter) -> Result<AnalysisResult> {
    let result = match filter.analysis_type {
        AnalysisType::Raw => AnalysisResult::Raw(client.get_climate_data(filter).await?),
        AnalysisType::Weighted => AnalysisResult::Weighted(client.get_climate_summary(filter).await?),
        AnalysisType::Trends => AnalysisResult::Trends(client.get_trends(filter).await?),
    };
    info!(
        "Fetched {} analysis with {} entries",
        filter.analysis_type,
        result.len()
    );
    Ok(result)
}

/// Run one apply: `set_loading(true)`, one fetch, `set_loading(false)`.
/// The flag is reset whether or not the fetch succeeds.
pub async fn apply<L>(client: &ApiClient, filter: &Filter, mut set_loading: L) -> Result<AnalysisResult>
where
    L: FnMut(bool),
{
    set_loading(true);
    let outcome = fetch_analysis(client, filter).await;
    set_loading(false);
    outcome
}

/// The result to hold once an apply has settled. A success replaces the
/// previous result; a failure is logged and leaves the previous one on screen.
pub fn settle(
    previous: Option<AnalysisResult>,
    outcome: Result<AnalysisResult>,
) -> Option<AnalysisResult> {
    match outcome {
        Ok(result) => Some(result),
        Err(e) => {
            error!("Error fetching data: {}", e);
            previous
        }
    }
}

/// Load locations and metrics concurrently; fails if either request fails.
pub async fn load_reference_data(client: &ApiClient) -> Result<(Vec<Location>, Vec<Metric>)> {
    let (locations, metrics) = try_join(client.get_locations(), client.get_metrics()).await?;
    info!(
        "Loaded {} locations and {} metrics",
        locations.len(),
        metrics.len()
    );
    Ok((locations, metrics))
}
