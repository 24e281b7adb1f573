//! Core types and REST client for the EcoVision climate backend.
//!
//! The backend owns every computation (aggregation, weighting, trend
//! regression, quality classification). This crate only:
//! - models the filter the user edits and turns it into query parameters,
//! - issues the read-only GET requests and normalizes their envelopes,
//! - dispatches one fetch per analysis mode into a single [`AnalysisResult`].
//!
//! It is shared by the Dioxus WASM dashboard and the native CLI; `reqwest`
//! uses the browser `fetch` API on `wasm32` and hyper everywhere else.

pub mod analysis;
pub mod client;
pub mod error;
pub mod filter;
pub mod models;
pub mod quality;
pub mod response;

pub use analysis::{apply, fetch_analysis, load_reference_data, settle, AnalysisResult};
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use filter::{AnalysisType, Filter, FilterField};
pub use models::{ClimateRecord, Location, Metric, MetricSummary, QualityDistribution, Summary, TrendResult};
pub use quality::QualityLevel;
pub use response::ResponseBody;
