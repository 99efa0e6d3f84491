//! Confirmation seam for destructive commands.
//!
//! Front ends decide how to ask (a terminal prompt, a `--yes` flag, a dialog);
//! the tracker only needs a synchronous yes/no before dispatching.

/// Answers a yes/no question before a destructive request is sent.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A fixed answer, e.g. from a `--yes` flag.
impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}
