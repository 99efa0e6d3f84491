//! # naplog-core
//!
//! Core types and error types for Naplog.
//!
//! This crate provides the foundational types shared across all Naplog crates:
//! - Entity structs returned by the sleep-tracking backend (sessions, naps, summaries)
//! - Request bodies for every mutating endpoint
//! - Date and clock helpers that build the backend's timestamp strings
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod requests;
pub mod time;

pub use entities::{ActiveSessionResponse, DailySummary, Nap, SleepHours, SleepSession};
pub use errors::CoreError;
