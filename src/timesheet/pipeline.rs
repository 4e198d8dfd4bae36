//! Per-day confirmation and submission of work segments.
//!
//! Each segment is split day-by-day with the same walk the clock uses;
//! every day with positive overlap becomes one candidate work item. Each
//! item is confirmed interactively and submitted on its own: a declined or
//! failed day never takes the rest of the run down with it.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::{Local, NaiveDateTime, TimeZone};

use crate::tracker::{TrackerClient, WorkItem, WorkItemDuration};

use super::hours::daily_overlaps;
use super::{TimeWindow, WorkHours, WorkSegment};

/// One day's share of a work segment, ready for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWork {
    /// The day's business-hours slice of the segment.
    pub window: TimeWindow,
    /// Description inherited from the segment.
    pub description: String,
}

impl DayWork {
    /// Duration in whole minutes.
    pub fn minutes(&self) -> i64 {
        self.window.minutes()
    }
}

/// Splits a segment into per-day work items, one per weekday with positive
/// business-hours overlap.
///
/// Overlaps shorter than a whole minute round down to zero and are dropped
/// here, so nothing downstream ever prompts for a 0-minute entry.
pub fn plan_day_work(segment: &WorkSegment, hours: WorkHours) -> Vec<DayWork> {
    daily_overlaps(segment.window, hours)
        .into_iter()
        .filter(|overlap| overlap.minutes() > 0)
        .map(|overlap| DayWork {
            window: overlap.window,
            description: segment.description.clone(),
        })
        .collect()
}

/// Interactive yes/no prompt.
pub trait Confirm {
    /// Asks whether to proceed; implementations decide what counts as yes.
    fn confirm(&mut self) -> bool;
}

/// Reads one line from stdin. Empty input and unreadable input both count
/// as yes, so a bare Enter (or a closed pipe) keeps the run moving.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self) -> bool {
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            tracing::warn!("Failed to read confirmation input, assuming yes");
            return true;
        }

        let input = input.trim().to_lowercase();
        input.is_empty() || input == "y" || input == "yes"
    }
}

/// Drives segments through per-day confirmation and submission.
pub struct WorkLogPipeline<C> {
    hours: WorkHours,
    confirm: C,
}

impl<C: Confirm> WorkLogPipeline<C> {
    /// Creates a pipeline with the given business hours and prompt.
    pub fn new(hours: WorkHours, confirm: C) -> Self {
        Self { hours, confirm }
    }

    /// Processes every day of every segment against one tracker issue.
    ///
    /// Declined days are skipped; failed submissions are logged and the
    /// loop continues. Prompt and stdout troubles are logged and treated
    /// as affirmative, so nothing here ends the run early.
    pub async fn process(
        &mut self,
        tracker: &TrackerClient,
        issue_id: &str,
        segments: &[WorkSegment],
    ) -> Result<()> {
        for segment in segments {
            for day in plan_day_work(segment, self.hours) {
                println!(
                    "Date: {}, Duration: {} minutes, Description: {}",
                    day.window.start.format("%Y-%m-%d"),
                    day.minutes(),
                    day.description
                );
                print!("Post this work item? (Y/n): ");
                if let Err(e) = io::stdout().flush() {
                    tracing::warn!("Failed to flush prompt to stdout: {e}");
                }

                if !self.confirm.confirm() {
                    println!("Skipping this work item");
                    continue;
                }

                let item = WorkItem {
                    date: local_epoch_millis(day.window.start),
                    duration: WorkItemDuration {
                        minutes: day.minutes(),
                    },
                    text: day.description.clone(),
                };

                match tracker.add_work_item(issue_id, &item).await {
                    Ok(()) => println!("Logged {} minutes against {issue_id}", day.minutes()),
                    Err(e) => {
                        tracing::error!(
                            issue_id,
                            date = %day.window.start.format("%Y-%m-%d"),
                            "Failed to add work item: {e}"
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

/// Interprets a wall-clock timestamp in the local timezone and returns
/// epoch milliseconds. Falls back to UTC when the local time is ambiguous
/// or skipped by a DST transition.
fn local_epoch_millis(naive: NaiveDateTime) -> i64 {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn at(d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn nine_to_six() -> WorkHours {
        WorkHours::parse("09:00", "18:00").unwrap()
    }

    fn segment(start: NaiveDateTime, end: NaiveDateTime, description: &str) -> WorkSegment {
        WorkSegment {
            window: TimeWindow::new(start, end).unwrap(),
            description: description.to_string(),
        }
    }

    /// Scripted prompt answering from a fixed list.
    struct Scripted(Vec<bool>);

    impl Confirm for Scripted {
        fn confirm(&mut self) -> bool {
            if self.0.is_empty() {
                true
            } else {
                self.0.remove(0)
            }
        }
    }

    #[test]
    fn wednesday_commit_scenario_yields_300_and_240_minutes() {
        // Work hours 09:00-18:00, commit Wednesday 14:00, window 08:00-20:00
        let before = plan_day_work(&segment(at(6, 8, 0), at(6, 14, 0), "x"), nine_to_six());
        let after = plan_day_work(&segment(at(6, 14, 0), at(6, 20, 0), "x"), nine_to_six());

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].minutes(), 300);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].minutes(), 240);
    }

    #[test]
    fn weekend_spanning_segment_plans_only_weekday_items() {
        // Friday 2024-11-08 17:00 through Monday 2024-11-11 10:00
        let days = plan_day_work(&segment(at(8, 17, 0), at(11, 10, 0), "x"), nine_to_six());

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].minutes(), 60);
        assert_eq!(days[1].minutes(), 60);
    }

    #[test]
    fn fully_out_of_hours_segment_plans_nothing() {
        let days = plan_day_work(&segment(at(6, 19, 0), at(6, 23, 0), "x"), nine_to_six());
        assert!(days.is_empty());
    }

    #[test]
    fn sub_minute_overlap_plans_no_item() {
        // 08:59:00 to 09:00:30 overlaps business hours by 30 seconds,
        // which truncates to 0 minutes and must not become a work item
        let end = at(6, 9, 0) + chrono::Duration::seconds(30);
        let days = plan_day_work(&segment(at(6, 8, 59), end, "x"), nine_to_six());
        assert!(days.is_empty());
    }

    #[tokio::test]
    async fn zero_minute_day_is_never_prompted_or_posted() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tracker = TrackerClient::new(server.uri(), "perm:abc");
        let end = at(6, 9, 0) + chrono::Duration::seconds(30);
        let segments = [segment(at(6, 8, 59), end, "blink of work")];

        // an empty script answers yes, so a prompt here would submit
        let mut pipeline = WorkLogPipeline::new(nine_to_six(), Scripted(vec![]));
        pipeline
            .process(&tracker, "BE-42", &segments)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn declined_day_is_skipped_without_aborting_the_rest() {
        let server = MockServer::start().await;

        // Two plannable days (Wed and Thu); only the confirmed one posts
        Mock::given(method("POST"))
            .and(path("/api/issues/BE-42/timeTracking/workItems"))
            .and(body_partial_json(serde_json::json!({
                "duration": { "minutes": 540 }
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let tracker = TrackerClient::new(server.uri(), "perm:abc");
        let segments = [segment(at(6, 0, 0), at(7, 23, 0), "two days of work")];

        let mut pipeline = WorkLogPipeline::new(nine_to_six(), Scripted(vec![false, true]));
        pipeline
            .process(&tracker, "BE-42", &segments)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failed_submission_does_not_stop_later_days() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(2)
            .mount(&server)
            .await;

        let tracker = TrackerClient::new(server.uri(), "perm:abc");
        let segments = [segment(at(6, 0, 0), at(7, 23, 0), "two days of work")];

        let mut pipeline = WorkLogPipeline::new(nine_to_six(), Scripted(vec![true, true]));
        // both days attempted, both failures logged, run still succeeds
        pipeline
            .process(&tracker, "BE-42", &segments)
            .await
            .unwrap();
    }
}
