//! View model derived from [`TrackerState`].
//!
//! Front ends render a [`TrackerView`] instead of reading state directly, so
//! the start/end exclusivity and the summary layout live in one place.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::messages;
use crate::state::TrackerState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerView {
    pub selected_date: NaiveDate,
    pub sleeping: bool,
    pub banner: Option<String>,
    pub start_enabled: bool,
    pub end_enabled: bool,
    /// "Sleep session active since ..." when a session is open.
    pub active_since: Option<String>,
    pub loading: bool,
    /// Hidden while loading.
    pub summary: Option<SummaryView>,
    pub manual_entry: Option<ManualEntryView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub date: NaiveDate,
    pub naps: Vec<NapEntry>,
    pub total_sleep_hours: f64,
    /// The total as the server wrote it.
    #[serde(skip)]
    pub total_sleep_hours_text: String,
    pub total_sleep_duration: Option<String>,
}

/// One numbered row of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NapEntry {
    /// 1-based position within the day.
    pub number: usize,
    pub id: i64,
    pub start: String,
    pub end: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualEntryView {
    pub start: String,
    pub end: String,
}

impl TrackerView {
    #[must_use]
    pub fn from_state(state: &TrackerState) -> Self {
        let loading = state.loading();
        let summary = if loading {
            None
        } else {
            state.summary.as_ref().map(|summary| SummaryView {
                date: summary.date.unwrap_or(state.selected_date),
                naps: summary
                    .naps
                    .iter()
                    .enumerate()
                    .map(|(index, nap)| NapEntry {
                        number: index + 1,
                        id: nap.id,
                        start: nap.start.clone(),
                        end: nap.end.clone(),
                        duration: nap.duration.clone(),
                    })
                    .collect(),
                total_sleep_hours: summary.hours(),
                total_sleep_hours_text: summary
                    .total_sleep_hours
                    .as_ref()
                    .map_or_else(|| "0.00".to_string(), ToString::to_string),
                total_sleep_duration: summary.total_sleep_duration.clone(),
            })
        };

        Self {
            selected_date: state.selected_date,
            sleeping: state.active_session.is_some(),
            banner: state.error.clone(),
            start_enabled: state.can_start(),
            end_enabled: state.can_end(),
            active_since: state
                .active_session
                .as_ref()
                .map(|session| format!("Sleep session active since {}", session.start_time)),
            loading,
            summary,
            manual_entry: state.manual_entry.visible.then(|| ManualEntryView {
                start: state.manual_entry.start.clone(),
                end: state.manual_entry.end.clone(),
            }),
        }
    }
}

impl SummaryView {
    #[must_use]
    pub fn total_line(&self) -> String {
        format!("Total Sleep: {} hours", self.total_sleep_hours_text)
    }
}

impl fmt::Display for TrackerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.sleeping { "sleeping" } else { "awake" };
        writeln!(f, "Baby Sleep Tracker ({status})")?;
        if let Some(banner) = &self.banner {
            writeln!(f, "! {banner}")?;
        }
        writeln!(f, "Date: {}", self.selected_date)?;

        let mark = |enabled: bool| if enabled { "x" } else { " " };
        writeln!(
            f,
            "[{}] Start Sleep   [{}] End Sleep",
            mark(self.start_enabled),
            mark(self.end_enabled)
        )?;
        if let Some(line) = &self.active_since {
            writeln!(f, "{line}")?;
        }

        if let Some(form) = &self.manual_entry {
            writeln!(f, "Add Manual Nap: start={} end={}", form.start, form.end)?;
        }

        if self.loading {
            return writeln!(f, "Loading...");
        }
        match &self.summary {
            Some(summary) => write!(f, "{summary}"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary for {}", self.date)?;
        if self.naps.is_empty() {
            return writeln!(f, "{}", messages::NO_NAPS);
        }
        for nap in &self.naps {
            writeln!(
                f,
                "  Nap #{} (id {}): {} - {}  [{}]",
                nap.number, nap.id, nap.start, nap.end, nap.duration
            )?;
        }
        write!(f, "{}", self.total_line())?;
        if let Some(duration) = &self.total_sleep_duration {
            write!(f, " ({duration})")?;
        }
        writeln!(f)
    }
}
