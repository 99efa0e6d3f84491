use clap::Subcommand;

use crate::cli::global::parse_clock_arg;

/// Nap commands. Clock values are `HH:MM` on the selected date.
#[derive(Clone, Debug, Subcommand)]
pub enum NapCommands {
    /// Record a completed nap.
    Add {
        #[arg(value_parser = parse_clock_arg)]
        start: String,
        #[arg(value_parser = parse_clock_arg)]
        end: String,
    },
    /// Delete a nap by ID.
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Change the start and/or end of a nap.
    Update {
        id: i64,
        #[arg(long, value_parser = parse_clock_arg)]
        start: Option<String>,
        #[arg(long, value_parser = parse_clock_arg)]
        end: Option<String>,
    },
}
