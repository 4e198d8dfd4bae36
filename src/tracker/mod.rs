//! YouTrack time-tracking client.
//!
//! One endpoint matters here: posting a work item against an issue. The
//! date-aware body is used so historical days land on the day the work
//! happened, not on whenever the tool was run.

use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

pub mod error;

pub use error::TrackerError;

/// A single day's time-tracking entry, in the tracker's wire shape.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkItem {
    /// Day the work happened, as epoch milliseconds.
    pub date: i64,
    /// How long it took.
    pub duration: WorkItemDuration,
    /// Free-text description shown on the issue.
    pub text: String,
}

/// Duration payload nested inside a work item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkItemDuration {
    /// Whole minutes of work.
    pub minutes: i64,
}

/// Client for the tracker's work-item endpoint.
pub struct TrackerClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TrackerClient {
    /// Creates a client for the given tracker instance.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Posts one work item against `issue_id`.
    ///
    /// A non-200 response is surfaced as [`TrackerError::Rejected`]
    /// carrying the response body text.
    pub async fn add_work_item(&self, issue_id: &str, item: &WorkItem) -> Result<()> {
        let url = format!(
            "{}/api/issues/{}/timeTracking/workItems",
            self.base_url, issue_id
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(item)
            .send()
            .await
            .map_err(|e| TrackerError::Network(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(TrackerError::Rejected(body).into());
        }

        Ok(())
    }
}
