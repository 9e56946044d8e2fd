//! The [`Price`] record and its construction from a Tushare daily bar.

use serde::{Deserialize, Serialize};
use tushare_api::types::DailyBar;

use crate::error::PriceError;

/// One trading day's OHLCV summary for one instrument.
///
/// `time` is kept exactly as Tushare reports it (`YYYYMMDD`). No consistency
/// between the price fields is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: i64,
    pub time: String,
}

impl Price {
    /// Builds a record from the bar at position `row` of a response.
    ///
    /// `vol` must hold a whole number; it is never rounded.
    pub fn from_daily_bar(row: usize, bar: DailyBar) -> Result<Self, PriceError> {
        let volume = whole_number(bar.vol).ok_or_else(|| PriceError::MalformedField {
            row,
            column: "vol",
            value: bar.vol.to_string(),
        })?;
        Ok(Self {
            open: bar.open,
            close: bar.close,
            high: bar.high,
            low: bar.low,
            volume,
            time: bar.trade_date,
        })
    }
}

// i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
fn whole_number(value: f64) -> Option<i64> {
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        Some(value as i64)
    } else {
        None
    }
}
