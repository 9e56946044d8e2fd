use serde::{Deserialize, Serialize};

/// One row of the `daily` interface. Prices are in CNY, `vol` in lots
/// (100 shares) and `amount` in thousands of CNY, as Tushare reports them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyBar {
    #[serde(default)]
    pub ts_code: Option<String>,
    pub trade_date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub vol: f64,
    #[serde(default)]
    pub pre_close: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub pct_chg: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
}
