mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tushare_prices_lib::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "tushare-prices")]
#[command(about = "Fetch daily stock prices from Tushare Pro")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily OHLCV prices for one ticker over a date range
    Prices(commands::prices::PricesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tushare_api=info".parse()?)
                .add_directive("tushare_prices_lib=info".parse()?)
                .add_directive("tushare_prices_cli=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    // TUSHARE_API_KEY is read once here; the client is shared by reference after.
    let client = Client::from_env()?;

    match &cli.command {
        Commands::Prices(args) => commands::prices::run(args, &client, &format).await?,
    }

    Ok(())
}
