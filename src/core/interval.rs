//! Day counting over calendar-date intervals.
//!
//! Dates are `NaiveDate`s (no time of day, no timezone), so spans are exact
//! day differences and no midday normalisation is needed.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Number of calendar days in `[start, end]`, both endpoints included.
///
/// The span is symmetric: swapping the arguments gives the same count.
/// Reversed input is rejected earlier, by [`DateRange::new`].
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// Inclusive day count of `[start, end] ∩ [window_start or -∞, today]`.
///
/// Returns 0 when the two intervals do not meet, so a period lying wholly
/// in the future never contributes.
pub fn past_overlap_days(
    start: NaiveDate,
    end: NaiveDate,
    window_start: Option<NaiveDate>,
    today: NaiveDate,
) -> i64 {
    let effective_start = match window_start {
        Some(w) if w > start => w,
        _ => start,
    };
    let effective_end = end.min(today);

    if effective_start > effective_end {
        return 0;
    }

    (effective_end - effective_start).num_days() + 1
}

/// A validated `[start, end]` pair with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn days(&self) -> i64 {
        inclusive_day_count(self.start, self.end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
