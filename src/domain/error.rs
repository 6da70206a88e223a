//! Error types for ledger API operations.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for ledger API operations.
///
/// Every variant renders as a human-readable message; callers surface the
/// message without distinguishing the failure kind.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-related errors from HTTP requests.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx HTTP response with the message resolved from the body.
    ///
    /// The message is the server's `error` field when the body parses as
    /// JSON, otherwise a generic message derived from the status code.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Resolved error message.
        message: String,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ApiError {
    /// Create a new API error with the given status and message.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_message_verbatim() {
        let err = ApiError::api(400, "Category is required");
        assert_eq!(format!("{err}"), "Category is required");
    }

    #[test]
    fn parse_error_display() {
        let err = ApiError::parse("missing field `transactions`");
        assert_eq!(format!("{err}"), "parse error: missing field `transactions`");
    }

    #[test]
    fn api_error_keeps_status() {
        match ApiError::api(503, "down") {
            ApiError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "down");
            }
            _ => panic!("expected Api variant"),
        }
    }
}
