//! Backend API connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default backend address when nothing is configured.
fn default_base_url() -> String {
    String::from("http://127.0.0.1:5000")
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("naplog/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the sleep-tracking backend (e.g., `http://192.168.1.172:5000`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout applied to every request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash, ready for path concatenation.
    #[must_use]
    pub fn endpoint_base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the base URL is usable and the timeout is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.endpoint_base();
        let host = base
            .strip_prefix("http://")
            .or_else(|| base.strip_prefix("https://"));
        match host {
            None => {
                return Err(ConfigError::InvalidValue {
                    field: "api.base_url".into(),
                    reason: format!("'{base}' must start with http:// or https://"),
                });
            }
            Some(host) if host.is_empty() => {
                return Err(ConfigError::InvalidValue {
                    field: "api.base_url".into(),
                    reason: "missing host".into(),
                });
            }
            Some(_) => {}
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.user_agent.starts_with("naplog/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn endpoint_base_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://192.168.1.172:5000/".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint_base(), "http://192.168.1.172:5000");
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let config = ApiConfig {
            base_url: "192.168.1.172:5000".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn rejects_base_url_without_host() {
        let config = ApiConfig {
            base_url: "https://".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.timeout_secs"));
    }
}
