//! Daily stock prices from Tushare Pro as typed [`Price`] records.
//!
//! Wraps the `tushare_api` client with the `daily` query and the mapping
//! from Tushare's column-oriented table into one record per trading day.

pub mod error;
pub mod fetch;
pub mod price;

pub use tushare_api;
pub use tushare_api::Client;

pub use error::PriceError;
pub use fetch::get_prices;
pub use price::Price;
