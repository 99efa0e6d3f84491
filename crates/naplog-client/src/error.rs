//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the sleep-tracking backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, invalid URL.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("API error ({status}): {}", .error.as_deref().unwrap_or(.body.as_str()))]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The `error` field of the JSON body, when the backend sent one.
        error: Option<String>,
        /// Raw response body.
        body: String,
    },

    /// A success response could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// The backend-provided error message, if this is an API error carrying one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Whether the failure happened before a status line was received
    /// (or the body could not be decoded).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Parse(_))
    }
}
