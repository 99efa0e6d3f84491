use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Nap;

/// Aggregate of completed naps for one calendar date.
///
/// Days without naps come back as `{ "message": ..., "naps": [] }`, so every
/// field other than `naps` is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub naps: Vec<Nap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sleep_hours: Option<SleepHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sleep_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DailySummary {
    /// Total hours, treating an absent total as zero.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.total_sleep_hours.as_ref().map_or(0.0, |hours| hours.value)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.naps.is_empty()
    }
}

/// Server-computed total sleep.
///
/// The backend sends either a JSON number or a numeric string; `text` keeps
/// the string form so the total is shown exactly as the server reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepHours {
    pub value: f64,
    pub text: String,
}

impl fmt::Display for SleepHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for SleepHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for SleepHours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Hours {
            Number(f64),
            Text(String),
        }

        match Hours::deserialize(deserializer)? {
            Hours::Number(value) => Ok(Self {
                value,
                text: value.to_string(),
            }),
            Hours::Text(text) => {
                let value = text.trim().parse::<f64>().map_err(|_| {
                    serde::de::Error::custom(format!("invalid total_sleep_hours '{text}'"))
                })?;
                Ok(Self {
                    value,
                    text: text.trim().to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "date": "2024-01-05",
        "naps": [
            {"id": 1, "start": "09:00", "end": "10:30", "duration": "1:30:00"},
            {"id": 2, "start": "13:00", "end": "14:00", "duration": "1:00:00"}
        ],
        "total_sleep_hours": "2.50",
        "total_sleep_duration": "2:30:00"
    }"#;

    #[test]
    fn parses_full_summary() {
        let summary: DailySummary = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(summary.date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(summary.naps.len(), 2);
        assert_eq!(summary.naps[1].start, "13:00");
        assert_eq!(summary.hours(), 2.5);
        assert_eq!(summary.total_sleep_hours.unwrap().to_string(), "2.50");
        assert_eq!(summary.total_sleep_duration.as_deref(), Some("2:30:00"));
    }

    #[test]
    fn parses_numeric_hours() {
        let summary: DailySummary =
            serde_json::from_str(r#"{"naps": [], "total_sleep_hours": 1.25}"#).unwrap();
        assert_eq!(summary.hours(), 1.25);
        assert_eq!(summary.total_sleep_hours.unwrap().text, "1.25");
    }

    #[test]
    fn keeps_server_precision_on_round_trip() {
        let summary: DailySummary =
            serde_json::from_str(r#"{"naps": [], "total_sleep_hours": "1.333"}"#).unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_sleep_hours"], "1.333");
    }

    #[test]
    fn parses_empty_day_message_shape() {
        let body = r#"{"message": "No completed sleep sessions recorded for 2024-01-06", "naps": []}"#;
        let summary: DailySummary = serde_json::from_str(body).unwrap();
        assert!(summary.is_empty());
        assert!(summary.date.is_none());
        assert!(summary.total_sleep_hours.is_none());
        assert_eq!(summary.hours(), 0.0);
        assert!(summary.message.is_some());
    }

    #[test]
    fn rejects_non_numeric_hours() {
        let result =
            serde_json::from_str::<DailySummary>(r#"{"naps": [], "total_sleep_hours": "lots"}"#);
        assert!(result.is_err());
    }
}
