//! # naplog-tracker
//!
//! The sleep tracker controller.
//!
//! [`Tracker`] owns the transient UI state (active session, selected day's
//! summary, banner error, manual-entry form), keeps it in sync with the
//! backend, and exposes the user-triggered commands. The backend is the only
//! source of truth: every command that can change sessions or naps re-fetches
//! instead of patching local state.
//!
//! All state mutations go through one lock that is never held across a
//! request, so the periodic active-session poll and user commands can run
//! concurrently.

pub mod confirm;
pub mod messages;
mod commands;
mod poll;
mod state;
mod tracker;
mod view;

pub use confirm::Confirm;
pub use poll::PollHandle;
pub use state::{ManualEntryForm, TrackerState};
pub use tracker::{Outcome, SummaryFetch, Tracker};
pub use view::{ManualEntryView, NapEntry, SummaryView, TrackerView};
