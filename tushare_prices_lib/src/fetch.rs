//! The daily price fetcher.

use tushare_api::types::DailyBar;
use tushare_api::{Client, DailyQuery};

use crate::error::PriceError;
use crate::price::Price;

/// Fetches daily prices for `ticker` between `start_date` and `end_date`.
///
/// The three arguments go to Tushare's `daily` interface unchanged as
/// `ts_code`, `start_date` and `end_date`; both bounds are inclusive and use
/// the provider's `YYYYMMDD` form. One request is made per call and its
/// failure is returned as is. Rows keep the order Tushare returns them in.
/// No rows gives an empty `Vec`.
pub async fn get_prices(
    client: &Client,
    ticker: &str,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<Price>, PriceError> {
    let query = DailyQuery::new(ticker)
        .with_start_date(start_date)
        .with_end_date(end_date);
    let table = client.query(&query).await?;

    if table.is_empty() {
        tracing::debug!("No daily bars for {} between {} and {}", ticker, start_date, end_date);
        return Ok(Vec::new());
    }

    let bars: Vec<DailyBar> = table.deserialize_rows().map_err(|e| {
        tracing::error!("Failed to map daily bar for {}: {}", ticker, e);
        PriceError::MalformedRow {
            row: e.row,
            reason: e.source.to_string(),
        }
    })?;

    let prices = bars
        .into_iter()
        .enumerate()
        .map(|(row, bar)| Price::from_daily_bar(row, bar))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("Fetched {} prices for {}", prices.len(), ticker);
    Ok(prices)
}
