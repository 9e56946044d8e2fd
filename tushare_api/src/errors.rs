//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not a valid Tushare envelope.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// Tushare answered with a non-zero code, e.g. an invalid token or missing permission.
    #[error("Tushare API error {code}: {msg}")]
    Api { code: i64, msg: String },
}
