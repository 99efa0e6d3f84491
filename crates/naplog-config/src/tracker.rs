//! Tracker behavior settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default interval between active-session polls, in seconds.
const fn default_poll_interval_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// How often `watch` mode re-checks the active session, in seconds.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl TrackerConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the poll interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tracker.poll_interval_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
