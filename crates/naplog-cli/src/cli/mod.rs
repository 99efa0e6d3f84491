use chrono::NaiveDate;
use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `naplog` binary.
#[derive(Debug, Parser)]
#[command(name = "naplog", version, about = "Naplog - baby sleep tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, table, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides `api.base_url`)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Day to operate on, YYYY-MM-DD (defaults to today)
    #[arg(short, long, global = true, value_parser = global::parse_date_arg)]
    pub date: Option<NaiveDate>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
            date: self.date,
        }
    }
}
