use serde::{Deserialize, Serialize};

/// A completed sleep record as listed in a [`DailySummary`](super::DailySummary).
///
/// `start` and `end` are `HH:MM` clocks, `duration` is `H:MM:SS`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Nap {
    pub id: i64,
    pub start: String,
    pub end: String,
    pub duration: String,
}
