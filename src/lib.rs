//! # worklogger
//!
//! Reconstructs plausible work-time intervals from git commit history and
//! reports them as time-tracking entries against a YouTrack issue.
//!
//! The interesting part lives in [`timesheet`]: turning an ordered commit
//! timeline plus a daily business-hours window into discrete work segments
//! with elapsed-minute durations. Everything else is plumbing around it —
//! [`git`] reads the history, [`tracker`] posts the work items.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod git;
pub mod timesheet;
pub mod tracker;

pub use crate::cli::Cli;

/// The current version of worklogger.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
