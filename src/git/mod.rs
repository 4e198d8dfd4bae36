//! Git history access.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use git2::Commit;

pub mod history;

pub use history::resolve_author_commits;

/// Read-only snapshot of one commit, detached from the repository.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    /// Full SHA-1 hash of the commit.
    pub hash: String,
    /// Author name as recorded in the commit.
    pub author: String,
    /// When the change was authored.
    pub author_date: DateTime<FixedOffset>,
    /// When the commit was created; the timeline the engine runs on.
    pub committer_date: DateTime<FixedOffset>,
    /// The commit message as written.
    pub message: String,
}

impl CommitInfo {
    /// Builds a snapshot from a `git2::Commit`.
    pub fn from_git_commit(commit: &Commit) -> Result<Self> {
        let hash = commit.id().to_string();
        let author = commit.author().name().unwrap_or("Unknown").to_string();
        let author_date = signature_time(commit.author().when())?;
        let committer_date = signature_time(commit.committer().when())?;
        let message = commit.message().unwrap_or("").trim().to_string();

        Ok(Self {
            hash,
            author,
            author_date,
            committer_date,
            message,
        })
    }

    /// The committer timestamp as local wall-clock time, which is the
    /// domain the timesheet engine works in.
    pub fn local_committer_time(&self) -> NaiveDateTime {
        self.committer_date.with_timezone(&Local).naive_local()
    }
}

fn signature_time(time: git2::Time) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
    Ok(DateTime::from_timestamp(time.seconds(), 0)
        .context("Invalid commit timestamp")?
        .with_timezone(&offset))
}
