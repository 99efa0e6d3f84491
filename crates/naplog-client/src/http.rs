//! Shared HTTP response helpers.
//!
//! Every endpoint treats any non-2xx status as a uniform failure. The
//! backend's `{ "error": ... }` envelope is extracted so callers can show the
//! server's own message.

use naplog_core::requests::ErrorBody;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// returns [`ClientError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        error: extract_error(&body),
        body,
    })
}

/// Read the body of a success response as JSON.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Pull the `error` field out of a JSON error body.
fn extract_error(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|message| !message.is_empty())
}
