//! Backend queries for each CLI subcommand.

use crate::export::write_records_csv;
use crate::format::{format_locations, format_metrics, format_summary_cards};
use eco_api::{ApiClient, Filter};
use eco_data::summary::summary_cards;
use log::info;
use std::fs::File;
use std::io::BufWriter;

pub async fn run_locations(client: &ApiClient) -> anyhow::Result<()> {
    let locations = client.get_locations().await?;
    info!("Fetched {} locations from {}", locations.len(), client.base_url());
    print!("{}", format_locations(&locations));
    Ok(())
}

pub async fn run_metrics(client: &ApiClient) -> anyhow::Result<()> {
    let metrics = client.get_metrics().await?;
    info!("Fetched {} metrics from {}", metrics.len(), client.base_url());
    print!("{}", format_metrics(&metrics));
    Ok(())
}

/// Print raw records as JSON, or write them to `csv_path`.
pub async fn run_climate(
    client: &ApiClient,
    filter: &Filter,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    info!("Querying climate data with '{}'", filter.build_query());
    let records = client.get_climate_data(filter).await?;

    match csv_path {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            let written = write_records_csv(file, &records)?;
            info!("Wrote {} records to {}", written, path);
        }
        None => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}

pub async fn run_summary(client: &ApiClient, filter: &Filter) -> anyhow::Result<()> {
    info!("Querying summary with '{}'", filter.build_query());
    let summary = client.get_climate_summary(filter).await?;
    if summary.is_empty() {
        println!("No summary data for this filter.");
        return Ok(());
    }
    print!("{}", format_summary_cards(&summary_cards(&summary)));
    Ok(())
}

pub async fn run_trends(client: &ApiClient, filter: &Filter) -> anyhow::Result<()> {
    info!("Querying trends with '{}'", filter.build_query());
    let trends = client.get_trends(filter).await?;
    println!("{}", serde_json::to_string_pretty(&trends)?);
    Ok(())
}
