use clap::{Args, Subcommand};

use crate::cli::subcommands::NapCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the active session and the selected day's summary.
    Status,
    /// Show the selected day's naps and total sleep.
    Summary,
    /// Start a sleep session now.
    Start,
    /// End the active sleep session now.
    End,
    /// Naps on the selected day.
    Nap {
        #[command(subcommand)]
        action: NapCommands,
    },
    /// Delete every nap on the selected day.
    ClearDay(ClearDayArgs),
    /// Interactive mode: keeps the screen in sync and reads commands from stdin.
    Watch(WatchArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ClearDayArgs {
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// Seconds between active-session checks (defaults to `tracker.poll_interval_secs`).
    #[arg(long)]
    pub interval: Option<u64>,
}
