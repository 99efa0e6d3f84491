//! Entity structs returned by the sleep-tracking backend.
//!
//! The backend owns every record. The client only decodes these shapes and
//! never mutates them locally.

mod nap;
mod session;
mod summary;

pub use nap::Nap;
pub use session::{ActiveSessionResponse, SleepSession};
pub use summary::{DailySummary, SleepHours};
