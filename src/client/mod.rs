//! HTTP client for the expense-tracking ledger API.
//!
//! This module provides the typed `LedgerClient` with one method per
//! endpoint. Response decoding is kept in pure functions over the status
//! code and raw body so error handling is testable without a live server.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::LedgerClient;
//!
//! let client = LedgerClient::new("http://localhost:8080/api")?;
//! let transactions = client.fetch_transactions().await?;
//! ```

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::ApiError;

mod categories;
mod reports;
mod transactions;

// ============================================================================
// Ledger API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct LedgerClient {
    /// Base URL without a trailing slash.
    base_url: String,
    /// HTTP client for requests.
    client: Client,
}

impl LedgerClient {
    /// Creates a new client for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ClientInit` if the HTTP client fails to initialize
    /// (e.g., TLS backend unavailable).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ApiError::client_init(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues a GET and returns the status with the raw body.
    pub(crate) async fn get_parts(&self, path: &str) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok((status, body))
    }

    /// Issues a POST with a JSON body and returns the status with the raw body.
    pub(crate) async fn post_parts<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok((status, body))
    }
}

// ============================================================================
// Response Decoding
// ============================================================================

/// Error body convention of the ledger API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Resolves the error message for a non-2xx response.
///
/// Prefers the body's `error` field, then a `message` field; a JSON body
/// with neither yields "Unknown error", and a non-JSON body falls back to
/// a message derived from the HTTP status code.
pub(crate) fn error_message(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .error
            .or(parsed.message)
            .unwrap_or_else(|| "Unknown error".to_string()),
        Err(_) => format!("request failed with HTTP status {}", status.as_u16()),
    }
}

/// Decodes a response body, mapping non-2xx statuses to `ApiError::Api`.
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, ApiError> {
    if !status.is_success() {
        return Err(ApiError::api(status.as_u16(), error_message(status, body)));
    }

    serde_json::from_slice(body).map_err(|e| ApiError::parse(e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
