//! Author-scoped commit history resolution.
//!
//! Finds "the current author's" commits across all local branches of a
//! repository within a date window. The author is not configured anywhere;
//! it is pinned from the first commit encountered inside the window, on the
//! assumption that whoever ran the tool is whoever has been committing.

use std::collections::HashSet;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use git2::{BranchType, Repository};

use super::CommitInfo;

/// Collects the current author's commits across all local branches within
/// `[since, until]` inclusive, deduplicated by hash and sorted ascending by
/// committer time (hash as tie-break).
///
/// A repository with no branches, or no commits in the window, yields an
/// empty list rather than an error.
pub fn resolve_author_commits(
    repo_path: &str,
    since: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Result<Vec<CommitInfo>> {
    let repo = Repository::open(repo_path)
        .with_context(|| format!("Failed to open git repository: {repo_path}"))?;

    let mut seen = HashSet::new();
    let mut commits = Vec::new();
    let mut current_author: Option<String> = None;

    let branches = repo
        .branches(Some(BranchType::Local))
        .context("Failed to list branches")?;

    for branch in branches {
        let (branch, _) = branch.context("Failed to read branch reference")?;
        let Some(target) = branch.get().target() else {
            continue;
        };

        let mut walker = repo.revwalk().context("Failed to create revwalk")?;
        walker
            .push(target)
            .context("Failed to push branch head to revwalk")?;

        for oid in walker {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = repo.find_commit(oid).context("Failed to find commit")?;
            let info = CommitInfo::from_git_commit(&commit)?;

            let committed = info.committer_date.with_timezone(&Utc);
            if committed < since || committed > until {
                continue;
            }

            // First qualifying commit pins the author for the rest of the run
            let author = current_author.get_or_insert_with(|| info.author.clone());
            if info.author != *author {
                continue;
            }

            if seen.insert(oid) {
                commits.push(info);
            }
        }
    }

    commits.sort_by(|a, b| {
        a.committer_date
            .cmp(&b.committer_date)
            .then_with(|| a.hash.cmp(&b.hash))
    });

    Ok(commits)
}
