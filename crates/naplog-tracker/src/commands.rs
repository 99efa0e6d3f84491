//! User-triggered commands.
//!
//! Each command reports its result both through the banner in
//! [`TrackerState::error`](crate::TrackerState) and through the returned
//! [`Outcome`]. Successful commands re-fetch whatever they may have changed.

use naplog_client::ClientError;
use naplog_core::requests::{ManualNapRequest, UpdateNapRequest};
use naplog_core::time::combine;

use crate::confirm::Confirm;
use crate::messages;
use crate::tracker::{Outcome, Tracker};

/// Banner text for a failed request: the backend's own message or `rejected`
/// for non-success statuses, `failed` for transport errors.
fn describe(error: &ClientError, rejected: &str, failed: &str) -> String {
    if error.is_transport() {
        failed.to_string()
    } else {
        error.server_message().unwrap_or(rejected).to_string()
    }
}

/// Same as [`describe`] but transport errors carry their detail.
fn describe_with_detail(error: &ClientError, rejected: &str, failed: &str) -> String {
    if error.is_transport() {
        format!("{failed}: {error}")
    } else {
        error.server_message().unwrap_or(rejected).to_string()
    }
}

impl Tracker {
    fn fail(&self, message: String) -> Outcome {
        self.update(|state| state.set_error(message.clone()));
        Outcome::Failed(message)
    }

    /// Open a new sleep session with a server-assigned start time.
    pub async fn start_sleep(&self) -> Outcome {
        match self.client.start_sleep().await {
            Ok(()) => {
                tracing::info!("sleep session started");
                tokio::join!(self.check_active_session(), self.refresh_summary());
                Outcome::Completed
            }
            Err(error) => {
                tracing::warn!(%error, "error starting sleep");
                let message = if error.is_transport() {
                    messages::START_FAILED
                } else {
                    messages::START_REJECTED
                };
                self.fail(message.to_string())
            }
        }
    }

    /// Close the open session with a server-assigned end time.
    ///
    /// On success the session is cleared locally right away. On failure the
    /// active session is re-read so the controls match the server.
    pub async fn end_sleep(&self) -> Outcome {
        match self.client.end_sleep().await {
            Ok(()) => {
                tracing::info!("sleep session ended");
                self.update(|state| state.active_session = None);
                self.refresh_summary().await;
                Outcome::Completed
            }
            Err(error) => {
                tracing::warn!(%error, "error ending sleep");
                let message = if error.is_transport() {
                    messages::END_FAILED
                } else {
                    messages::END_REJECTED
                };
                let outcome = self.fail(message.to_string());
                self.check_active_session().await;
                outcome
            }
        }
    }

    /// Record a completed nap on the selected date from two `HH:MM` clocks.
    ///
    /// Nothing is sent if either clock is empty or malformed. On success the
    /// manual-entry form is reset and the banner cleared.
    pub async fn add_manual_nap(&self, start_clock: &str, end_clock: &str) -> Outcome {
        if start_clock.trim().is_empty() || end_clock.trim().is_empty() {
            return self.fail(messages::MANUAL_NAP_MISSING_FIELDS.to_string());
        }

        let date = self.selected_date();
        let (Ok(start_time), Ok(end_time)) = (combine(date, start_clock), combine(date, end_clock))
        else {
            return self.fail(messages::MANUAL_NAP_BAD_FORMAT.to_string());
        };

        let body = ManualNapRequest {
            start_time,
            end_time,
        };
        match self.client.add_manual_nap(&body).await {
            Ok(()) => {
                tracing::info!(start = %body.start_time, end = %body.end_time, "manual nap added");
                self.update(|state| {
                    state.manual_entry.reset();
                    state.error = None;
                });
                self.refresh_summary().await;
                Outcome::Completed
            }
            Err(error) => {
                tracing::warn!(%error, "error adding manual nap");
                self.fail(describe_with_detail(
                    &error,
                    messages::MANUAL_NAP_REJECTED,
                    messages::MANUAL_NAP_FAILED,
                ))
            }
        }
    }

    /// Submit the manual-entry form fields.
    pub async fn submit_manual_entry(&self) -> Outcome {
        let form = self.snapshot().manual_entry;
        self.add_manual_nap(&form.start, &form.end).await
    }

    /// Delete every nap on the selected date, after confirmation.
    pub async fn clear_day_data(&self, confirm: &impl Confirm) -> Outcome {
        if !confirm.confirm(messages::CLEAR_DAY_PROMPT) {
            return Outcome::Declined;
        }

        let date = self.selected_date();
        match self.client.clear_day(date).await {
            Ok(()) => {
                tracing::info!(%date, "day cleared");
                self.update(|state| state.error = None);
                self.refresh_summary().await;
                Outcome::Completed
            }
            Err(error) => {
                tracing::warn!(%date, %error, "error clearing day data");
                let message = if error.is_transport() {
                    format!("{}: {error}", messages::CLEAR_DAY_FAILED)
                } else {
                    messages::CLEAR_DAY_REJECTED.to_string()
                };
                self.fail(message)
            }
        }
    }

    /// Delete one nap, after confirmation.
    pub async fn delete_nap(&self, id: i64, confirm: &impl Confirm) -> Outcome {
        if !confirm.confirm(&format!("Delete nap {id}?")) {
            return Outcome::Declined;
        }

        match self.client.delete_nap(id).await {
            Ok(()) => {
                tracing::info!(id, "nap deleted");
                self.update(|state| state.error = None);
                self.refresh_summary().await;
                Outcome::Completed
            }
            Err(error) => {
                tracing::warn!(id, %error, "error deleting nap");
                self.fail(describe(
                    &error,
                    messages::DELETE_NAP_REJECTED,
                    messages::DELETE_NAP_FAILED,
                ))
            }
        }
    }

    /// Move the bounds of an existing nap. Clocks are combined with the
    /// selected date; at least one must be given.
    pub async fn update_nap(
        &self,
        id: i64,
        start_clock: Option<&str>,
        end_clock: Option<&str>,
    ) -> Outcome {
        let start_clock = start_clock.filter(|clock| !clock.trim().is_empty());
        let end_clock = end_clock.filter(|clock| !clock.trim().is_empty());
        if start_clock.is_none() && end_clock.is_none() {
            return self.fail(messages::UPDATE_NAP_MISSING_FIELDS.to_string());
        }

        let date = self.selected_date();
        let start_time = start_clock.map(|clock| combine(date, clock)).transpose();
        let end_time = end_clock.map(|clock| combine(date, clock)).transpose();
        let (Ok(start_time), Ok(end_time)) = (start_time, end_time) else {
            return self.fail(messages::MANUAL_NAP_BAD_FORMAT.to_string());
        };

        let body = UpdateNapRequest {
            start_time,
            end_time,
        };
        match self.client.update_nap(id, &body).await {
            Ok(()) => {
                tracing::info!(id, "nap updated");
                self.update(|state| state.error = None);
                self.refresh_summary().await;
                Outcome::Completed
            }
            Err(error) => {
                tracing::warn!(id, %error, "error updating nap");
                self.fail(describe(
                    &error,
                    messages::UPDATE_NAP_REJECTED,
                    messages::UPDATE_NAP_FAILED,
                ))
            }
        }
    }
}
