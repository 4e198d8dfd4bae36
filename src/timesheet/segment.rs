//! Splitting a commit timeline into candidate work segments.

use chrono::{Duration, NaiveDateTime};

use super::{TimeWindow, WorkSegment};

/// One commit reduced to what segmentation needs: when it landed and what
/// it said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPoint {
    /// Committer timestamp in local wall-clock time.
    pub time: NaiveDateTime,
    /// Commit message, used as the work-item description.
    pub message: String,
}

/// Commits closer together than this are one work burst; the time between
/// them is not reported separately. A policy knob, not a physical law.
const BURST_GAP_MINUTES: i64 = 60;

/// Partitions the reporting window into candidate work segments around the
/// given commits, which must be sorted ascending by time.
///
/// With no commits at all, the whole window becomes one undescribed
/// segment. Otherwise: the stretch before the first commit, each gap
/// between consecutive commits longer than an hour, and the stretch after
/// the last commit each become a segment described by the commit that
/// closed it. No segment is ever empty or inverted.
pub fn segment_commits(commits: &[CommitPoint], reporting: TimeWindow) -> Vec<WorkSegment> {
    let mut segments = Vec::new();

    let Some(first) = commits.first() else {
        if reporting.end > reporting.start {
            segments.push(WorkSegment {
                window: reporting,
                description: String::new(),
            });
        }
        return segments;
    };

    if first.time > reporting.start {
        segments.push(WorkSegment {
            window: TimeWindow {
                start: reporting.start,
                end: first.time,
            },
            description: first.message.clone(),
        });
    }

    for pair in commits.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if next.time - current.time > Duration::minutes(BURST_GAP_MINUTES) {
            segments.push(WorkSegment {
                window: TimeWindow {
                    start: current.time,
                    end: next.time,
                },
                description: next.message.clone(),
            });
        }
    }

    // commits are sorted, so last.time >= first.time
    if let Some(last) = commits.last() {
        if last.time < reporting.end {
            segments.push(WorkSegment {
                window: TimeWindow {
                    start: last.time,
                    end: reporting.end,
                },
                description: last.message.clone(),
            });
        }
    }

    segments
}
