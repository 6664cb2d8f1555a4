// src/export/range.rs

use crate::core::interval::DateRange;
use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

fn invalid(msg: &str, raw: &str) -> AppError {
    AppError::InvalidDate(format!("{msg}: {raw}"))
}

/// First and last day of a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid("invalid year", p))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid year", p))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid year", p))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid("invalid month", p))?;
            let last = month_last_day(d1).ok_or_else(|| invalid("invalid month", p))?;
            Ok((d1, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| invalid("invalid date", p))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported range format", p)),
    }
}

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid("start and end must have the same format", r));
        }

        let (first, _) = period_bounds(start)?;
        let (_, last) = period_bounds(end)?;
        return DateRange::new(first, last);
    }

    let (first, last) = period_bounds(r.trim())?;
    DateRange::new(first, last)
}
