//! The time-accounting reconstruction engine.
//!
//! Works entirely in wall-clock time (`NaiveDateTime`): commit timestamps
//! are converted to local time at the boundary, and everything here reasons
//! about calendar days and times-of-day the way a timesheet does.

use anyhow::{ensure, Result};
use chrono::{NaiveDateTime, NaiveTime};

pub mod hours;
pub mod pipeline;
pub mod segment;

pub use hours::{business_minutes, daily_overlaps};
pub use pipeline::{StdinConfirm, WorkLogPipeline};
pub use segment::segment_commits;

/// A half-open-in-spirit time interval with `start <= end`.
///
/// Whether it means a reporting period, a candidate work segment, or a
/// single day's slice is up to whoever constructed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive start of the interval.
    pub start: NaiveDateTime,
    /// End of the interval, never before `start`.
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Creates a window, rejecting `start > end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        ensure!(
            start <= end,
            "time window start {start} is after end {end}"
        );
        Ok(Self { start, end })
    }

    /// Whole minutes between start and end, truncated toward zero.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// The daily business-hours window, e.g. 09:00 to 18:00.
///
/// Overnight shifts are not supported: start must come before end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkHours {
    /// Start of the working day.
    pub start: NaiveTime,
    /// End of the working day.
    pub end: NaiveTime,
}

impl WorkHours {
    /// Parses a pair of "HH:MM" strings into a validated window.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = NaiveTime::parse_from_str(start, "%H:%M")
            .map_err(|e| anyhow::anyhow!("invalid work-hours start {start:?}: {e}"))?;
        let end = NaiveTime::parse_from_str(end, "%H:%M")
            .map_err(|e| anyhow::anyhow!("invalid work-hours end {end:?}: {e}"))?;
        ensure!(
            start < end,
            "work-hours start {start} must be before end {end}"
        );
        Ok(Self { start, end })
    }
}

/// A candidate stretch of working time, not yet clipped to business hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSegment {
    /// The raw interval the segment covers.
    pub window: TimeWindow,
    /// Message of the commit that ended the segment; empty when no commit
    /// evidence exists for the period.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn time_window_rejects_inverted_bounds() {
        let start = at(2024, 11, 4, 10, 0);
        let end = at(2024, 11, 4, 9, 0);
        assert!(TimeWindow::new(start, end).is_err());
        assert!(TimeWindow::new(end, start).is_ok());
    }

    #[test]
    fn time_window_allows_empty_interval() {
        let t = at(2024, 11, 4, 10, 0);
        let window = TimeWindow::new(t, t).unwrap();
        assert_eq!(window.minutes(), 0);
    }

    #[test]
    fn work_hours_parse_round_trips() {
        let hours = WorkHours::parse("09:00", "18:00").unwrap();
        assert_eq!(hours.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(hours.end, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn work_hours_rejects_overnight_and_garbage() {
        assert!(WorkHours::parse("18:00", "09:00").is_err());
        assert!(WorkHours::parse("09:00", "09:00").is_err());
        assert!(WorkHours::parse("nine", "18:00").is_err());
        assert!(WorkHours::parse("09:00", "25:61").is_err());
    }
}
