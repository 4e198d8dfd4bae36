//! Tracker-specific error handling.

use thiserror::Error;

/// Errors from the time-tracking submission endpoint.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Transport-level failure before a response was received.
    #[error("Network error talking to tracker: {0}")]
    Network(String),

    /// The tracker answered with a non-200 status.
    #[error("Tracker rejected work item: {0}")]
    Rejected(String),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
