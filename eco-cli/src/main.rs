//! EcoVision CLI - Command line tool for querying the climate backend.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "eco-cli",
    version,
    about = "EcoVision climate data toolkit"
)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "ECO_API_BASE_URL", default_value = eco_api::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: eco_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let client = eco_cmd::build_client(&cli.base_url)?;
    eco_cmd::run(&client, cli.command).await
}
