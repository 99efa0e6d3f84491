//! # naplog-client
//!
//! HTTP client for the Naplog sleep-tracking backend.
//!
//! One method per endpoint of the backend's REST contract:
//! - `GET /active`, `POST /start`, `POST /end` (in-progress sessions)
//! - `GET /summary`, `POST /clear-day` (per-day aggregates)
//! - `POST /manual-nap`, `PUT /nap/{id}`, `DELETE /nap/{id}` (completed naps)
//!
//! Bodies are JSON. Any non-2xx status becomes [`ClientError::Api`].

mod error;
mod http;
mod naps;
mod sessions;
mod summary;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::ClientError;

use naplog_config::ApiConfig;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct SleepApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SleepApiClient {
    /// Build a client from API settings. The configured timeout applies to
    /// every request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.endpoint_base().to_string(),
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
