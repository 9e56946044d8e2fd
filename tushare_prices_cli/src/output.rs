use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tushare_prices_lib::Price;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            "markdown" | "md" => Self::Markdown,
            _ => Self::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct PriceRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    time: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: i64,
}

fn build_price_rows(prices: &[Price]) -> Vec<PriceRow> {
    prices
        .iter()
        .map(|p| PriceRow {
            time: p.time.clone(),
            open: format_price(p.open),
            high: format_price(p.high),
            low: format_price(p.low),
            close: format_price(p.close),
            volume: p.volume,
        })
        .collect()
}

pub fn print_prices_table(prices: &[Price]) {
    let mut table = Table::new(build_price_rows(prices));
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn print_prices_markdown(prices: &[Price]) {
    let mut table = Table::new(build_price_rows(prices));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_prices_csv(prices: &[Price]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_price_rows(prices) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}
