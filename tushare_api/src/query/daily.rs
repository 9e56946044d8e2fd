//! Query builder for the `daily` interface (unadjusted daily bars).

use serde_json::{Map, Value};

use super::common::{Query, QueryCommon};

/// Query for daily OHLCV bars of one instrument.
///
/// Dates use the provider's `YYYYMMDD` form and are passed through untouched.
#[derive(Clone, Debug)]
pub struct DailyQuery {
    pub common: QueryCommon,
    pub ts_code: String,
    pub trade_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DailyQuery {
    /// Creates a query for the given Tushare code (e.g. `000001.SZ`).
    pub fn new(ts_code: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            ts_code: ts_code.to_string(),
            trade_date: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Restricts the query to a single trading day.
    pub fn with_trade_date(mut self, trade_date: &str) -> Self {
        self.trade_date = Some(trade_date.to_string());
        self
    }

    /// Sets the inclusive start of the date range.
    pub fn with_start_date(mut self, start_date: &str) -> Self {
        self.start_date = Some(start_date.to_string());
        self
    }

    /// Sets the inclusive end of the date range.
    pub fn with_end_date(mut self, end_date: &str) -> Self {
        self.end_date = Some(end_date.to_string());
        self
    }
}

impl Query for DailyQuery {
    fn api_name(&self) -> &'static str {
        "daily"
    }

    fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("ts_code".to_string(), Value::String(self.ts_code.clone()));
        if let Some(ref trade_date) = self.trade_date {
            params.insert("trade_date".to_string(), Value::String(trade_date.clone()));
        }
        if let Some(ref start_date) = self.start_date {
            params.insert("start_date".to_string(), Value::String(start_date.clone()));
        }
        if let Some(ref end_date) = self.end_date {
            params.insert("end_date".to_string(), Value::String(end_date.clone()));
        }
        params
    }

    fn common(&self) -> &QueryCommon {
        &self.common
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
