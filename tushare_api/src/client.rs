//! HTTP client for the Tushare Pro API.

use std::time::Duration;

use serde_json::json;
use url::Url;

use crate::{
    query::{DailyQuery, Query},
    types::{ApiResponse, DailyBar, TableData},
    Error,
};

/// Production endpoint. Every interface is served from this single URL.
pub const DEFAULT_BASE_URL: &str = "http://api.tushare.pro";

/// Environment variable holding the Tushare token.
pub const API_KEY_ENV: &str = "TUSHARE_API_KEY";

/// Environment variable overriding the endpoint.
pub const BASE_URL_ENV: &str = "TUSHARE_BASE_URL";

/// Request timeout for Tushare API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated Tushare Pro client.
///
/// Built once with its token and then only read, so a single instance can be
/// shared by reference for the lifetime of the program.
pub struct Client {
    client: reqwest::Client,
    token: String,
    base_url: Url,
}

impl Client {
    /// Creates a new client pointing at the production endpoint.
    pub fn new(token: String) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: String) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::RequestFailed
        })?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            client,
            token,
            base_url,
        })
    }

    /// Creates a client from `TUSHARE_API_KEY` and, if set, `TUSHARE_BASE_URL`.
    ///
    /// A missing token is not an error here: an empty token is sent and
    /// Tushare rejects the first request.
    pub fn from_env() -> Result<Self, Error> {
        let token = std::env::var(API_KEY_ENV).unwrap_or_default();
        if token.is_empty() {
            tracing::debug!("{} is not set, requests will be sent without a token", API_KEY_ENV);
        }
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::with_base_url(&url, token),
            Err(_) => Self::new(token),
        }
    }

    /// The endpoint this client sends requests to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Sends `query` and returns the resulting table.
    ///
    /// Makes exactly one request; nothing is retried.
    pub async fn query<Q: Query>(&self, query: &Q) -> Result<TableData, Error> {
        let body = json!({
            "api_name": query.api_name(),
            "token": self.token,
            "params": query.params(),
            "fields": query.fields(),
        });
        tracing::debug!("Querying {} with {}", query.api_name(), body["params"]);

        let resp = self
            .client
            .post(self.base_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to query {}: {}", query.api_name(), e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&text);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<ApiResponse>(&text).map_err(|e| {
            let snippet = truncate_body(&text);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::ParseFailed(e.to_string())
        })?;

        let table = parsed.into_table().inspect_err(|e| {
            tracing::error!("{} rejected by Tushare: {}", query.api_name(), e);
        })?;
        tracing::debug!("{} returned {} rows", query.api_name(), table.len());
        Ok(table)
    }

    /// Fetches daily bars matching the given query.
    pub async fn daily(&self, query: &DailyQuery) -> Result<Vec<DailyBar>, Error> {
        let table = self.query(query).await?;
        table.deserialize_rows().map_err(|e| {
            tracing::error!("Failed to parse daily bar: {}", e);
            Error::ParseFailed(e.to_string())
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
