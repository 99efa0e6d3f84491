//! User-facing banner messages.

pub const FETCH_SUMMARY_FAILED: &str = "Error fetching summary";
pub const START_REJECTED: &str = "Failed to start sleep session";
pub const START_FAILED: &str = "Error starting sleep session";
pub const END_REJECTED: &str = "Failed to end sleep session";
pub const END_FAILED: &str = "Error ending sleep session";
pub const CLEAR_DAY_REJECTED: &str = "Failed to clear day data";
pub const CLEAR_DAY_FAILED: &str = "Error clearing day data";
pub const MANUAL_NAP_MISSING_FIELDS: &str = "Please fill in both start and end times";
pub const MANUAL_NAP_BAD_FORMAT: &str = "Times must be in HH:MM format";
pub const MANUAL_NAP_REJECTED: &str = "Failed to add manual nap";
pub const MANUAL_NAP_FAILED: &str = "Error adding manual nap";
pub const UPDATE_NAP_MISSING_FIELDS: &str = "Provide a new start or end time";
pub const UPDATE_NAP_REJECTED: &str = "Failed to update nap";
pub const UPDATE_NAP_FAILED: &str = "Error updating nap";
pub const DELETE_NAP_REJECTED: &str = "Failed to delete nap";
pub const DELETE_NAP_FAILED: &str = "Error deleting nap";

pub const CLEAR_DAY_PROMPT: &str = "Are you sure you want to clear all sleep data for this day?";
pub const NO_NAPS: &str = "No sleep sessions recorded for this date";
