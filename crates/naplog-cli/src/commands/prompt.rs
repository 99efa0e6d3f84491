use std::io::{self, BufRead, Write};

use naplog_tracker::Confirm;

/// Asks on stderr and reads one line from stdin. Anything but `y`/`yes`
/// declines, including EOF and read errors.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(error) => {
                tracing::warn!(%error, "failed to read confirmation");
                false
            }
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
