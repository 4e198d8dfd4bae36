//! CLI interface for worklogger.

use anyhow::{Context, Result};
use chrono::{Duration, Local, Utc};
use clap::Parser;

use crate::config::Config;
use crate::git::resolve_author_commits;
use crate::timesheet::segment::CommitPoint;
use crate::timesheet::{segment_commits, StdinConfirm, TimeWindow, WorkLogPipeline};
use crate::tracker::TrackerClient;

/// worklogger: reconstruct work-time entries from git history and post
/// them to YouTrack.
#[derive(Parser)]
#[command(name = "worklogger")]
#[command(about = "Reconstructs time-tracking entries from git commit history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: String,

    /// How many days back to reconstruct
    #[arg(short, long, default_value_t = 8)]
    pub days: i64,
}

impl Cli {
    /// Runs one reconstruction pass over every configured project.
    pub async fn execute(self) -> Result<()> {
        let config = Config::load(&self.config).context("Error loading config")?;
        let work_hours = config.work_hours()?;

        let tracker = TrackerClient::new(config.youtrack_url.clone(), config.api_token.clone());

        let until = Utc::now();
        let since = until - Duration::days(self.days);

        let now_local = Local::now().naive_local();
        let reporting = TimeWindow::new(now_local - Duration::days(self.days), now_local)?;

        for project in &config.calendar_projects {
            println!(
                "Processing calendar project: {} (Issue ID: {})",
                project.name, project.issue_id
            );
            // Calendar sources are not wired up yet
        }

        for project in &config.git_projects {
            println!(
                "Processing git project: {} (Repo Path: {}, Issue ID: {})",
                project.name, project.repo_path, project.issue_id
            );

            let commits = match resolve_author_commits(&project.repo_path, since, until) {
                Ok(commits) => commits,
                Err(e) => {
                    tracing::error!(project = %project.name, "Error processing git project: {e}");
                    continue;
                }
            };

            if commits.is_empty() {
                println!(
                    "No commits found for project {} by the current author",
                    project.name
                );
            } else {
                println!(
                    "Found {} commit(s) for project {} by the current author:",
                    commits.len(),
                    project.name
                );
                for commit in &commits {
                    println!(
                        "- {}: {}",
                        commit.committer_date.format("%Y-%m-%d %H:%M"),
                        commit.message.lines().next().unwrap_or("")
                    );
                }
            }

            let points: Vec<CommitPoint> = commits
                .iter()
                .map(|c| CommitPoint {
                    time: c.local_committer_time(),
                    message: c.message.clone(),
                })
                .collect();

            let segments = segment_commits(&points, reporting);

            let mut pipeline = WorkLogPipeline::new(work_hours, StdinConfirm);
            if let Err(e) = pipeline
                .process(&tracker, &project.issue_id, &segments)
                .await
            {
                tracing::error!(project = %project.name, "Error logging work: {e}");
            }
        }

        Ok(())
    }
}
