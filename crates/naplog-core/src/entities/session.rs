use serde::{Deserialize, Serialize};

/// A sleep interval that has started but not ended yet.
///
/// `start_time` is the backend's display string (e.g. `"01:30 PM"`); the
/// client shows it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SleepSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub start_time: String,
}

/// Body of `GET /active`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveSessionResponse {
    #[serde(default)]
    pub active_session: Option<SleepSession>,
}
