use chrono::NaiveDate;
use naplog_core::{DailySummary, SleepSession};
use serde::Serialize;

/// Manual-entry form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManualEntryForm {
    pub visible: bool,
    pub start: String,
    pub end: String,
}

impl ManualEntryForm {
    /// Hide the form and clear both fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Client-owned, transient UI state.
///
/// `active_session` decides which of the start/end controls is enabled; see
/// [`TrackerState::can_start`] and [`TrackerState::can_end`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerState {
    pub active_session: Option<SleepSession>,
    pub summary: Option<DailySummary>,
    pub selected_date: NaiveDate,
    pub error: Option<String>,
    pub manual_entry: ManualEntryForm,
    /// Summary requests still awaiting a response.
    #[serde(skip)]
    pub(crate) summaries_in_flight: u32,
    /// Sequence number handed to the most recently issued summary request.
    #[serde(skip)]
    pub(crate) summary_issued: u64,
    /// Sequence number of the summary currently shown.
    #[serde(skip)]
    pub(crate) summary_applied: u64,
}

impl TrackerState {
    #[must_use]
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            active_session: None,
            summary: None,
            selected_date,
            error: None,
            manual_entry: ManualEntryForm::default(),
            summaries_in_flight: 0,
            summary_issued: 0,
            summary_applied: 0,
        }
    }

    /// True while at least one summary request is outstanding.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.summaries_in_flight > 0
    }

    #[must_use]
    pub const fn can_start(&self) -> bool {
        self.active_session.is_none()
    }

    #[must_use]
    pub const fn can_end(&self) -> bool {
        self.active_session.is_some()
    }

    /// Replace the banner. Only the latest error is kept.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TrackerState {
        TrackerState::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
    }

    #[test]
    fn exactly_one_control_enabled() {
        let mut state = state();
        assert!(state.can_start() && !state.can_end());

        state.active_session = Some(SleepSession {
            id: Some(1),
            start_time: "01:00 PM".into(),
        });
        assert!(!state.can_start() && state.can_end());
    }

    #[test]
    fn latest_error_overwrites() {
        let mut state = state();
        state.set_error("first");
        state.set_error("second");
        assert_eq!(state.error.as_deref(), Some("second"));
    }

    #[test]
    fn loading_tracks_in_flight_requests() {
        let mut state = state();
        assert!(!state.loading());
        state.summaries_in_flight = 2;
        assert!(state.loading());
    }

    #[test]
    fn form_reset_hides_and_clears() {
        let mut form = ManualEntryForm {
            visible: true,
            start: "13:00".into(),
            end: "14:00".into(),
        };
        form.reset();
        assert_eq!(form, ManualEntryForm::default());
    }
}
