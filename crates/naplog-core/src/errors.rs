//! Cross-cutting error types for Naplog.
//!
//! Transport errors live in `naplog-client` and configuration errors in
//! `naplog-config`. Errors raised before any request is built end up here.

use thiserror::Error;

/// Errors raised while interpreting user-supplied values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A date or clock string did not match the expected layout.
    #[error("Invalid {field} '{value}': expected {expected}")]
    InvalidFormat {
        field: String,
        value: String,
        expected: String,
    },
}
