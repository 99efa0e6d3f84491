//! Periodic active-session polling.
//!
//! Makes sessions started or ended from another device visible without user
//! action. Freshness is bounded by the poll interval.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::tracker::Tracker;

/// Running poll task. Stops when dropped.
#[derive(Debug)]
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn stop(self) {
        drop(self);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl Tracker {
    /// Re-check the active session every `interval` on the current runtime.
    ///
    /// The first check happens one interval from now; callers load the
    /// initial state with [`Tracker::refresh`].
    #[must_use]
    pub fn spawn_active_poll(&self, interval: Duration) -> PollHandle {
        let tracker = self.clone();
        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tracing::trace!("polling active session");
                tracker.check_active_session().await;
            }
        });
        PollHandle { task }
    }
}
