//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::Jail;
use naplog_config::NaplogConfig;
use pretty_assertions::assert_eq;

/// Write `.naplog/config.toml` inside the jail.
fn project_config(jail: &Jail, contents: &str) -> figment::error::Result<()> {
    std::fs::create_dir_all(jail.directory().join(".naplog")).map_err(|e| e.to_string())?;
    jail.create_file(".naplog/config.toml", contents)?;
    Ok(())
}

#[test]
fn loads_project_config_from_toml() {
    Jail::expect_with(|jail| {
        project_config(
            jail,
            r#"
[api]
base_url = "http://192.168.1.172:5000"
timeout_secs = 3

[tracker]
poll_interval_secs = 10
"#,
        )?;

        let config = NaplogConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://192.168.1.172:5000");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.tracker.poll_interval_secs, 10);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        project_config(
            jail,
            r#"
[api]
base_url = "http://from-toml:5000"
"#,
        )?;
        jail.set_env("NAPLOG_API__BASE_URL", "http://from-env:5000");
        jail.set_env("NAPLOG_TRACKER__POLL_INTERVAL_SECS", "5");

        let config = NaplogConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://from-env:5000");
        assert_eq!(config.tracker.poll_interval_secs, 5);
        Ok(())
    });
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    Jail::expect_with(|jail| {
        project_config(jail, "[tracker]\npoll_interval_secs = 60\n")?;

        let config = NaplogConfig::load().expect("config loads");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.tracker.poll_interval_secs, 60);
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("NAPLOG_API__TIMEOUT_SECS", "0");

        let err = NaplogConfig::load().expect_err("zero timeout must fail");
        assert!(err.to_string().contains("api.timeout_secs"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        project_config(jail, "[api\nbase_url = ")?;

        let err = NaplogConfig::load().expect_err("malformed toml must fail");
        assert!(err.to_string().starts_with("Configuration error"));
        Ok(())
    });
}
