//! # naplog-config
//!
//! Layered configuration loading for Naplog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NAPLOG_*` prefix, `__` as separator)
//! 2. Project-level `.naplog/config.toml`
//! 3. User-level `~/.config/naplog/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NAPLOG_API__BASE_URL` -> `api.base_url` and
//! `NAPLOG_TRACKER__POLL_INTERVAL_SECS` -> `tracker.poll_interval_secs`.
//!
//! # Usage
//!
//! ```no_run
//! use naplog_config::NaplogConfig;
//!
//! let config = NaplogConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.endpoint_base());
//! ```

mod api;
mod error;
mod tracker;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use tracker::TrackerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory holding the project-local config file.
pub const PROJECT_DIR: &str = ".naplog";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NaplogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
}

impl NaplogConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and callers can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("NAPLOG_").split("__"))
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.tracker.validate()
    }

    /// Replace the backend base URL (e.g. from a `--base-url` flag) and re-validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the new URL is unusable.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.api.base_url = base_url.into();
        self.api.validate()?;
        Ok(self)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("naplog").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NaplogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tracker.poll_interval_secs, 30);
    }

    #[test]
    fn with_base_url_overrides_and_validates() {
        let config = NaplogConfig::default()
            .with_base_url("http://10.0.0.2:5000/")
            .expect("valid url");
        assert_eq!(config.api.endpoint_base(), "http://10.0.0.2:5000");

        assert!(NaplogConfig::default().with_base_url("ftp://x").is_err());
    }
}
