use anyhow::Context;
use naplog_client::SleepApiClient;
use naplog_config::NaplogConfig;
use naplog_tracker::Tracker;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: NaplogConfig,
    pub tracker: Tracker,
}

impl AppContext {
    /// Load configuration, apply flag overrides and build the tracker for the
    /// selected day.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let mut config =
            NaplogConfig::load_with_dotenv().context("failed to load naplog configuration")?;
        if let Some(base_url) = &flags.base_url {
            config = config
                .with_base_url(base_url.as_str())
                .context("invalid --base-url")?;
        }

        let client =
            SleepApiClient::new(&config.api).context("failed to build the backend client")?;
        tracing::debug!(base_url = client.base_url(), "backend client ready");

        let tracker = match flags.date {
            Some(date) => Tracker::with_date(client, date),
            None => Tracker::new(client),
        };

        Ok(Self { config, tracker })
    }
}
