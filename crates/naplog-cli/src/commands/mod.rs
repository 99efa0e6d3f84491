use anyhow::bail;
use naplog_tracker::{Outcome, Tracker};

use crate::cli::GlobalFlags;
use crate::output::output;

pub mod clear_day;
pub mod dispatch;
pub mod nap;
pub mod prompt;
pub mod session;
pub mod status;
pub mod summary;
pub mod watch;

/// Print the refreshed screen after a completed command; a failed command
/// becomes the process error.
pub fn report(outcome: Outcome, tracker: &Tracker, flags: &GlobalFlags) -> anyhow::Result<()> {
    match outcome {
        Outcome::Completed => output(&tracker.view(), flags.format),
        Outcome::Declined => {
            if !flags.quiet {
                eprintln!("Cancelled.");
            }
            Ok(())
        }
        Outcome::Failed(message) => bail!(message),
    }
}
