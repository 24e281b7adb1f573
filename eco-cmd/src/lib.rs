//! Command implementations for the EcoVision CLI.
//!
//! Provides subcommands for listing reference data and querying the raw,
//! weighted-summary and trend endpoints with the same filter the dashboard uses.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use eco_api::{AnalysisType, ApiClient, Filter, QualityLevel};

pub mod export;
pub mod format;
pub mod query;

/// Filter flags shared by the analysis subcommands.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// Location id (see `locations`)
    #[arg(long)]
    pub location_id: Option<String>,

    /// Metric name (see `metrics`)
    #[arg(long)]
    pub metric: Option<String>,

    /// First day to include (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub start_date: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub end_date: Option<NaiveDate>,

    /// Minimum quality tier: excellent, good, questionable or poor
    #[arg(long)]
    pub quality_threshold: Option<QualityLevel>,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    eco_utils::dates::parse_date(value).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

impl FilterArgs {
    pub fn to_filter(&self, analysis_type: AnalysisType) -> Filter {
        Filter {
            location_id: self.location_id.clone().filter(|id| !id.is_empty()),
            start_date: self.start_date,
            end_date: self.end_date,
            metric: self.metric.clone().filter(|m| !m.is_empty()),
            quality_threshold: self.quality_threshold,
            analysis_type,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List monitoring locations
    Locations,

    /// List available metrics
    Metrics,

    /// Fetch raw climate records
    Climate {
        #[command(flatten)]
        filter: FilterArgs,

        /// Write records to this CSV file instead of printing JSON
        #[arg(long)]
        csv: Option<String>,
    },

    /// Fetch quality-weighted summary statistics per metric
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Fetch trend analysis per metric
    Trends {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Build an API client for the CLI (named user agent, no timeout).
pub fn build_client(base_url: &str) -> anyhow::Result<ApiClient> {
    let http = reqwest::Client::builder()
        .user_agent(concat!("eco-cli/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(ApiClient::with_client(http, base_url))
}

pub async fn run(client: &ApiClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Locations => query::run_locations(client).await,
        Command::Metrics => query::run_metrics(client).await,
        Command::Climate { filter, csv } => {
            query::run_climate(client, &filter.to_filter(AnalysisType::Raw), csv.as_deref()).await
        }
        Command::Summary { filter } => {
            query::run_summary(client, &filter.to_filter(AnalysisType::Weighted)).await
        }
        Command::Trends { filter } => {
            query::run_trends(client, &filter.to_filter(AnalysisType::Trends)).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn climate_flags_become_filter() {
        let cli = TestCli::try_parse_from([
            "eco-cli",
            "climate",
            "--location-id",
            "2",
            "--start-date",
            "2024-01-01",
            "--quality-threshold",
            "good",
            "--csv",
            "out.csv",
        ])
        .unwrap();
        match cli.command {
            Command::Climate { filter, csv } => {
                assert_eq!(csv.as_deref(), Some("out.csv"));
                let filter = filter.to_filter(AnalysisType::Raw);
                assert_eq!(
                    filter.build_query(),
                    "location_id=2&start_date=2024-01-01&quality_threshold=good"
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let result = TestCli::try_parse_from(["eco-cli", "summary", "--end-date", "31/12/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_quality_is_rejected() {
        let result = TestCli::try_parse_from(["eco-cli", "trends", "--quality-threshold", "great"]);
        assert!(result.is_err());
    }

    #[test]
    fn to_filter_sets_mode_and_drops_empty_strings() {
        let args = FilterArgs {
            location_id: Some(String::new()),
            metric: Some("co2".to_string()),
            ..FilterArgs::default()
        };
        let filter = args.to_filter(AnalysisType::Weighted);
        assert_eq!(filter.analysis_type, AnalysisType::Weighted);
        assert_eq!(filter.location_id, None);
        assert_eq!(filter.metric.as_deref(), Some("co2"));
    }
}
