//! API endpoint configuration.
//!
//! The ledger API base URL is process-wide configuration resolved once at
//! startup: CLI flag first, then the environment, then a documented default.

// ============================================================================
// Constants
// ============================================================================

/// Default ledger API base URL, matching a local development server.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Environment variable consulted when no CLI flag is given.
pub const API_URL_ENV: &str = "LAZYLEDGER_API_URL";

// ============================================================================
// Configuration
// ============================================================================

/// Resolved API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are joined onto, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Creates a config from an explicit base URL.
    ///
    /// Trailing slashes are trimmed so endpoint joining stays uniform.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the base URL from the CLI flag, the environment, or the default.
    #[must_use]
    pub fn resolve(flag: Option<String>) -> Self {
        Self::from_sources(flag, std::env::var(API_URL_ENV).ok())
    }

    /// Pure resolution used by [`ApiConfig::resolve`]: flag > env > default.
    #[must_use]
    pub fn from_sources(flag: Option<String>, env: Option<String>) -> Self {
        let url = flag
            .or(env)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(&url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

// ============================================================================
// Tests
// ============================================================================
