//! The `prices` subcommand: daily bars for one ticker.

use anyhow::Result;
use clap::Args;
use tushare_prices_lib::{get_prices, Client};

use crate::output::{
    print_json, print_prices_csv, print_prices_markdown, print_prices_table, OutputFormat,
};

#[derive(Args)]
pub struct PricesArgs {
    /// Tushare code, e.g. 000001.SZ or 600519.SH
    #[arg(long)]
    pub ticker: String,

    /// First trading day, inclusive (YYYYMMDD)
    #[arg(long)]
    pub start_date: String,

    /// Last trading day, inclusive (YYYYMMDD)
    #[arg(long)]
    pub end_date: String,
}

pub async fn run(args: &PricesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let prices = get_prices(client, &args.ticker, &args.start_date, &args.end_date).await?;

    eprintln!(
        "{} trading days for {} ({} - {})",
        prices.len(),
        args.ticker,
        args.start_date,
        args.end_date
    );

    match format {
        OutputFormat::Table => print_prices_table(&prices),
        OutputFormat::Json => print_json(&prices),
        OutputFormat::Csv => print_prices_csv(&prices)?,
        OutputFormat::Markdown => print_prices_markdown(&prices),
    }

    Ok(())
}
