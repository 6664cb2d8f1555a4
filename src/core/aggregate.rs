//! Counters and views derived from several collections at once.

use crate::core::interval::{inclusive_day_count, past_overlap_days};
use crate::core::status::{RotationStatus, document_status, rotation_status};
use crate::models::{Rotation, SeaTimeEntry, TrainingDocument};
use chrono::{Datelike, NaiveDate};

/// Days spent aboard between Jan 1 of `year` and `today`.
///
/// Days after `today` are never counted, even when they fall in `year`.
pub fn days_onboard_in_year(rotations: &[Rotation], year: i32, today: NaiveDate) -> i64 {
    let Some(jan_first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return 0;
    };

    rotations
        .iter()
        .map(|r| past_overlap_days(r.start_date, r.end_date, Some(jan_first), today))
        .sum()
}

/// Past sea days from historical entries plus tracked rotations.
///
/// Plain sum: a real date covered by both a historical entry and a rotation
/// is counted twice. Keeping the two sources disjoint is left to the user.
pub fn total_career_days(
    rotations: &[Rotation],
    historical: &[SeaTimeEntry],
    today: NaiveDate,
) -> i64 {
    let historical_days: i64 = historical
        .iter()
        .map(|h| past_overlap_days(h.start_date, h.end_date, None, today))
        .sum();

    let rotation_days: i64 = rotations
        .iter()
        .map(|r| past_overlap_days(r.start_date, r.end_date, None, today))
        .sum();

    historical_days + rotation_days
}

/// Full length of every historical entry, future days included.
pub fn historical_total_days(historical: &[SeaTimeEntry]) -> i64 {
    historical
        .iter()
        .map(|h| inclusive_day_count(h.start_date, h.end_date))
        .sum()
}

/// Expiring or expired documents, soonest expiry first.
pub fn urgent_documents(docs: &[TrainingDocument], today: NaiveDate) -> Vec<&TrainingDocument> {
    let mut out: Vec<&TrainingDocument> = docs
        .iter()
        .filter(|d| document_status(d.expiry_date, today).is_urgent())
        .collect();

    out.sort_by_key(|d| (d.expiry_date.is_none(), d.expiry_date));
    out
}

/// Rotations not yet finished (`end >= today`), soonest start first.
/// Finished rotations stay in storage, they are only left out here.
pub fn active_rotation_queue(rotations: &[Rotation], today: NaiveDate) -> Vec<&Rotation> {
    let mut queue: Vec<&Rotation> = rotations.iter().filter(|r| r.end_date >= today).collect();
    queue.sort_by_key(|r| r.start_date);
    queue
}

/// Head of the active queue and its status. `None` means ashore with
/// nothing planned.
pub fn next_rotation(rotations: &[Rotation], today: NaiveDate) -> Option<(&Rotation, RotationStatus)> {
    active_rotation_queue(rotations, today)
        .into_iter()
        .next()
        .map(|r| (r, rotation_status(r.start_date, r.end_date, today)))
}

/// Everything the dashboard shows, computed in one pass.
#[derive(Debug)]
pub struct Dashboard<'a> {
    pub today: NaiveDate,
    pub year: i32,
    pub days_onboard_this_year: i64,
    pub total_career_days: i64,
    pub next: Option<(&'a Rotation, RotationStatus)>,
    pub urgent_count: usize,
    pub urgent_preview: Vec<&'a TrainingDocument>,
}

impl<'a> Dashboard<'a> {
    pub fn build(
        rotations: &'a [Rotation],
        historical: &'a [SeaTimeEntry],
        docs: &'a [TrainingDocument],
        today: NaiveDate,
        preview: usize,
    ) -> Self {
        let year = today.year();
        let urgent = urgent_documents(docs, today);

        Self {
            today,
            year,
            days_onboard_this_year: days_onboard_in_year(rotations, year, today),
            total_career_days: total_career_days(rotations, historical, today),
            next: next_rotation(rotations, today),
            urgent_count: urgent.len(),
            urgent_preview: urgent.into_iter().take(preview).collect(),
        }
    }
}
