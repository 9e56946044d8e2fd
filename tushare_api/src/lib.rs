//! Minimal typed client for the Tushare Pro HTTP API.
//!
//! Every Tushare interface is reached through a single POST endpoint that
//! takes an `api_name`, the caller's token and a params object, and answers
//! with a column-oriented table. [`Client::query`] sends any [`Query`];
//! [`Client::daily`] is the typed shortcut for daily bars.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{DailyQuery, Query, QueryCommon};
