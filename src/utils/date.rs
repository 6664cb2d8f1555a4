use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a mandatory `YYYY-MM-DD` CLI argument.
pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    input.map(|s| parse_date_arg(s)).transpose()
}

/// `--today` override used by tests, otherwise the local calendar date.
pub fn resolve_today(override_date: Option<&String>) -> AppResult<NaiveDate> {
    Ok(parse_optional_date(override_date)?.unwrap_or_else(today))
}

/// Parse `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((first.year(), first.month()))
}

pub fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    first
        .with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

pub fn all_days_of_month(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = month_last_day(first)?;
    Some(first.iter_days().take_while(|d| *d <= last).collect())
}
