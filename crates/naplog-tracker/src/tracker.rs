use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use naplog_client::SleepApiClient;
use naplog_core::time::today;
use serde::Serialize;
use tokio::sync::watch;

use crate::messages;
use crate::state::TrackerState;
use crate::view::TrackerView;

/// Result of a user-triggered command.
///
/// Failures are also written to the banner; the returned message is the same
/// text so non-interactive front ends can report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum Outcome {
    Completed,
    /// The user declined the confirmation prompt; nothing was sent.
    Declined,
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// What happened to one summary request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFetch {
    Applied,
    /// The response arrived after the selected date changed or after a newer
    /// request was applied, and was dropped.
    Stale,
    Failed,
}

/// Stateful controller for one client of the sleep-tracking backend.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Tracker {
    pub(crate) client: SleepApiClient,
    state: Arc<Mutex<TrackerState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Tracker {
    /// Tracker showing today's date.
    #[must_use]
    pub fn new(client: SleepApiClient) -> Self {
        Self::with_date(client, today())
    }

    #[must_use]
    pub fn with_date(client: SleepApiClient, selected_date: NaiveDate) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            client,
            state: Arc::new(Mutex::new(TrackerState::new(selected_date))),
            revision: Arc::new(revision),
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TrackerState {
        self.lock().clone()
    }

    /// Derived view of the current state.
    #[must_use]
    pub fn view(&self) -> TrackerView {
        TrackerView::from_state(&self.lock())
    }

    #[must_use]
    pub fn selected_date(&self) -> NaiveDate {
        self.lock().selected_date
    }

    /// Receiver that changes every time the state is mutated.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Apply a mutation under the state lock and notify subscribers.
    pub(crate) fn update<R>(&self, apply: impl FnOnce(&mut TrackerState) -> R) -> R {
        let result = apply(&mut self.lock());
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
        result
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TrackerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Re-read the in-progress session.
    ///
    /// Failures are logged and leave the previous value in place; this call
    /// never touches the banner.
    pub async fn check_active_session(&self) {
        match self.client.active_session().await {
            Ok(session) => {
                tracing::debug!(active = session.is_some(), "active session checked");
                self.update(|state| state.active_session = session);
            }
            Err(error) => {
                tracing::warn!(%error, "error checking active session");
            }
        }
    }

    /// Fetch the summary for `date`.
    ///
    /// The response is applied only if `date` is still the selected date and
    /// no newer summary request has already been applied. `loading` stays set
    /// until every outstanding summary request has finished, whether it
    /// succeeded, failed or was cancelled.
    pub async fn fetch_summary(&self, date: NaiveDate) -> SummaryFetch {
        let seq = self.update(|state| {
            state.summary_issued += 1;
            state.summaries_in_flight += 1;
            state.summary_issued
        });
        let _loading = LoadingGuard { tracker: self };

        let result = self.client.summary(date).await;

        self.update(|state| {
            let current = state.selected_date == date && seq > state.summary_applied;
            match result {
                Ok(summary) if current => {
                    state.summary = Some(summary);
                    state.summary_applied = seq;
                    SummaryFetch::Applied
                }
                Err(error) if current => {
                    tracing::warn!(%date, %error, "error fetching summary");
                    state.set_error(messages::FETCH_SUMMARY_FAILED);
                    SummaryFetch::Failed
                }
                Ok(_) => {
                    tracing::debug!(%date, seq, "discarding stale summary response");
                    SummaryFetch::Stale
                }
                Err(error) => {
                    tracing::debug!(%date, seq, %error, "discarding stale summary failure");
                    SummaryFetch::Stale
                }
            }
        })
    }

    /// Load everything the view needs: active session and the selected
    /// day's summary, concurrently.
    pub async fn refresh(&self) {
        let date = self.selected_date();
        tokio::join!(self.check_active_session(), self.fetch_summary(date));
    }

    /// Switch to another day and load it.
    pub async fn select_date(&self, date: NaiveDate) {
        self.update(|state| state.selected_date = date);
        tokio::join!(self.check_active_session(), self.fetch_summary(date));
    }

    pub(crate) async fn refresh_summary(&self) {
        let date = self.selected_date();
        self.fetch_summary(date).await;
    }

    // ── Local UI state ─────────────────────────────────────────────

    pub fn dismiss_error(&self) {
        self.update(|state| state.error = None);
    }

    pub fn toggle_manual_entry(&self) {
        self.update(|state| state.manual_entry.visible = !state.manual_entry.visible);
    }

    pub fn set_manual_start(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(|state| state.manual_entry.start = value);
    }

    pub fn set_manual_end(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(|state| state.manual_entry.end = value);
    }
}

/// Decrements the in-flight summary count on every exit path.
struct LoadingGuard<'a> {
    tracker: &'a Tracker,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.tracker.update(|state| {
            state.summaries_in_flight = state.summaries_in_flight.saturating_sub(1);
        });
    }
}
