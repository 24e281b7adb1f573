//! Read-only REST client for the climate backend.

use crate::error::{ApiError, Result};
use crate::filter::Filter;
use crate::models::{ClimateRecord, Location, Metric, Summary, TrendResult};
use crate::response::{interpret, ResponseBody};
use log::{debug, error};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Backend base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api/v1";

pub const CLIMATE_PATH: &str = "/climate";
pub const LOCATIONS_PATH: &str = "/locations";
pub const METRICS_PATH: &str = "/metrics";
pub const SUMMARY_PATH: &str = "/summary";
pub const TRENDS_PATH: &str = "/trends";

/// Thin wrapper over a `reqwest::Client` bound to one backend.
///
/// No retries, caching or timeouts: each call is exactly one GET.
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (the CLI sets a user agent).
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path, without query string.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `{base}{path}` with the filter's query parameters.
    ///
    /// Transport failures become [`ApiError::Network`]; non-2xx answers become
    /// [`ApiError::Request`] (see [`crate::response::interpret`]).
    pub async fn request(&self, path: &str, filter: Option<&Filter>) -> Result<ResponseBody> {
        let mut builder = self
            .http
            .get(self.endpoint(path))
            .header(ACCEPT, "application/json");
        if let Some(filter) = filter {
            let pairs = filter.query_pairs();
            if !pairs.is_empty() {
                builder = builder.query(&pairs);
            }
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let text = response.text().await?;
        debug!("GET {} -> {} ({} bytes)", path, status, text.len());

        interpret(status, content_type.as_deref(), text)
    }

    /// Request `path` and unwrap the envelope's `data`, logging any failure
    /// under the accessor's name before handing it back to the caller.
    async fn fetch_data<T>(&self, name: &str, path: &str, filter: Option<&Filter>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let result = self
            .request(path, filter)
            .await
            .and_then(|body| body.into_data::<T>().map_err(ApiError::from));
        if let Err(e) = &result {
            error!("API Error ({}): {}", name, e);
        }
        result
    }

    /// Raw observations matching the filter.
    pub async fn get_climate_data(&self, filter: &Filter) -> Result<Vec<ClimateRecord>> {
        self.fetch_data("get_climate_data", CLIMATE_PATH, Some(filter))
            .await
    }

    pub async fn get_locations(&self) -> Result<Vec<Location>> {
        self.fetch_data("get_locations", LOCATIONS_PATH, None).await
    }

    pub async fn get_metrics(&self) -> Result<Vec<Metric>> {
        self.fetch_data("get_metrics", METRICS_PATH, None).await
    }

    /// Quality-weighted summary statistics keyed by metric.
    pub async fn get_climate_summary(&self, filter: &Filter) -> Result<Summary> {
        self.fetch_data("get_climate_summary", SUMMARY_PATH, Some(filter))
            .await
    }

    /// Trend analysis keyed by metric.
    pub async fn get_trends(&self, filter: &Filter) -> Result<TrendResult> {
        self.fetch_data("get_trends", TRENDS_PATH, Some(filter)).await
    }
}
