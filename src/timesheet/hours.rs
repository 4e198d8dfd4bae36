//! Business-hours arithmetic.
//!
//! The single day-walk here backs both uses the engine has for it: summing
//! overlap minutes (`business_minutes`) and producing the per-day slices
//! the submission pipeline turns into work items (`daily_overlaps`).

use chrono::{Datelike, Weekday};

use super::{TimeWindow, WorkHours};

/// One calendar day's intersection of a raw interval with business hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOverlap {
    /// The clipped interval; always non-empty and within one day.
    pub window: TimeWindow,
}

impl DayOverlap {
    /// Duration of the overlap in whole minutes.
    pub fn minutes(&self) -> i64 {
        self.window.minutes()
    }
}

/// Walks each calendar day touching `window` and yields the non-empty
/// intersections with `hours`. Saturdays and Sundays are skipped entirely.
pub fn daily_overlaps(window: TimeWindow, hours: WorkHours) -> Vec<DayOverlap> {
    let mut overlaps = Vec::new();

    let mut day = window.start.date();
    let last = window.end.date();
    while day <= last {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            let work_start = day.and_time(hours.start);
            let work_end = day.and_time(hours.end);

            let overlap_start = window.start.max(work_start);
            let overlap_end = window.end.min(work_end);

            if overlap_start < overlap_end {
                overlaps.push(DayOverlap {
                    // overlap_start < overlap_end was just checked
                    window: TimeWindow {
                        start: overlap_start,
                        end: overlap_end,
                    },
                });
            }
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    overlaps
}

/// Minutes of `window` that fall within business hours on non-weekend
/// days, truncated toward zero per day. Always non-negative.
pub fn business_minutes(window: TimeWindow, hours: WorkHours) -> i64 {
    daily_overlaps(window, hours)
        .iter()
        .map(DayOverlap::minutes)
        .sum()
}
