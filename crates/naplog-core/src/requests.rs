//! Request bodies for the backend's mutating endpoints.
//!
//! `None` fields that the backend fills in itself (server-assigned start and
//! end times) are sent as explicit JSON `null`.

use serde::{Deserialize, Serialize};

/// Body of `POST /start`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartSleepRequest {
    pub start_time: Option<String>,
}

/// Body of `POST /end`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndSleepRequest {
    pub sleep_id: Option<i64>,
    pub end_time: Option<String>,
}

/// Body of `POST /manual-nap`. Both timestamps are `YYYY-MM-DD HH:MM`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManualNapRequest {
    pub start_time: String,
    pub end_time: String,
}

/// Body of `POST /clear-day`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClearDayRequest {
    pub date: String,
}

/// Body of `PUT /nap/{id}`. Omitted fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateNapRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Error envelope the backend returns with non-success statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
