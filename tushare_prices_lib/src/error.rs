//! Error types for the library layer.

use thiserror::Error;

/// Errors from fetching and mapping daily prices.
#[derive(Error, Debug)]
pub enum PriceError {
    /// The remote call failed. Passed through from the API client unchanged.
    #[error(transparent)]
    Api(#[from] tushare_api::Error),
    /// A row is missing an expected column or holds a value of the wrong type.
    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
    /// A value has the right type but cannot be represented in the record.
    #[error("Malformed field `{column}` in row {row}: {value}")]
    MalformedField {
        row: usize,
        column: &'static str,
        value: String,
    },
}
