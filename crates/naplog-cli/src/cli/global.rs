use chrono::NaiveDate;
use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tracker screen.
    Text,
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub base_url: Option<String>,
    pub date: Option<NaiveDate>,
}

/// clap value parser for `YYYY-MM-DD` dates.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    naplog_core::time::parse_date(value).map_err(|error| error.to_string())
}

/// clap value parser for `HH:MM` clocks. The raw string is kept; the tracker
/// combines it with the selected date.
pub fn parse_clock_arg(value: &str) -> Result<String, String> {
    naplog_core::time::parse_clock(value)
        .map(|_| value.trim().to_string())
        .map_err(|error| error.to_string())
}
