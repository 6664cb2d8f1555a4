//! Formatting utilities used for CLI outputs.

use chrono::NaiveDate;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a date with the configured strftime pattern (e.g. `%d/%m/%Y`).
/// An invalid pattern falls back to ISO `YYYY-MM-DD`.
pub fn format_date(d: NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", d.format(pattern)).is_err() {
        return d.format("%Y-%m-%d").to_string();
    }
    out
}

pub fn format_optional_date(d: Option<NaiveDate>, pattern: &str, none: &str) -> String {
    d.map(|d| format_date(d, pattern))
        .unwrap_or_else(|| none.to_string())
}

/// "1 day" / "N days".
pub fn days_label(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

/// First 8 characters of an id, enough to be typed back as a prefix.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
