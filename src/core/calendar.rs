//! Calendar placement: what falls on each day of a month.

use crate::core::interval::DateRange;
use crate::errors::{AppError, AppResult};
use crate::models::{Leave, Rotation, TrainingDocument};
use crate::utils::date::all_days_of_month;
use chrono::{Datelike, NaiveDate};

#[derive(Debug)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub rotations: Vec<&'a Rotation>,
    pub leaves: Vec<&'a Leave>,
    pub expiring_docs: Vec<&'a TrainingDocument>,
}

impl CalendarDay<'_> {
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty() && self.leaves.is_empty() && self.expiring_docs.is_empty()
    }
}

#[derive(Debug)]
pub struct MonthAgenda<'a> {
    pub year: i32,
    pub month: u32,
    /// Blank cells before the 1st in a Sunday-first grid.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay<'a>>,
}

/// Place rotations and leaves on every day they cover (endpoints included)
/// and documents on their expiry day.
pub fn month_agenda<'a>(
    year: i32,
    month: u32,
    rotations: &'a [Rotation],
    leaves: &'a [Leave],
    docs: &'a [TrainingDocument],
    today: NaiveDate,
) -> AppResult<MonthAgenda<'a>> {
    let dates = all_days_of_month(year, month)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))?;

    let leading_blanks = dates
        .first()
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);

    let days = dates
        .into_iter()
        .map(|date| {
            let covers = |start: NaiveDate, end: NaiveDate| {
                DateRange { start, end }.contains(date)
            };

            CalendarDay {
                date,
                is_today: date == today,
                rotations: rotations
                    .iter()
                    .filter(|r| covers(r.start_date, r.end_date))
                    .collect(),
                leaves: leaves
                    .iter()
                    .filter(|l| covers(l.start_date, l.end_date))
                    .collect(),
                expiring_docs: docs
                    .iter()
                    .filter(|d| d.expiry_date == Some(date))
                    .collect(),
            }
        })
        .collect();

    Ok(MonthAgenda {
        year,
        month,
        leading_blanks,
        days,
    })
}
