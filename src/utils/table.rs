//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns (`unicode-width`), so names with
//! accents or emoji stay aligned. ANSI escape codes are ignored when
//! measuring.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Cut `s` to at most `max` columns, ending with "…" when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub struct Column {
    pub header: String,
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: "-".to_string(),
        }
    }

    pub fn with_separator(mut self, sep: &str) -> Self {
        if !sep.is_empty() {
            self.separator = sep.to_string();
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of each column: widest cell (or header), capped at `max_width`.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| display_width(cell))
                    .chain(std::iter::once(display_width(&col.header)))
                    .max()
                    .unwrap_or(0);
                widest.min(col.max_width)
            })
            .collect()
    }

    fn render_line(out: &mut String, cells: &[String], widths: &[usize]) {
        for (cell, width) in cells.iter().zip(widths) {
            let cell = if strip_ansi(cell) == *cell {
                truncate(cell, *width)
            } else {
                cell.clone()
            };
            let pad = width.saturating_sub(display_width(&cell));
            out.push_str(&cell);
            out.push_str(&" ".repeat(pad + 1));
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        Self::render_line(&mut out, &headers, &widths);

        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&self.separator.repeat(total));
        out.push('\n');

        for row in &self.rows {
            Self::render_line(&mut out, row, &widths);
        }

        out
    }
}
