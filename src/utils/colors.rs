/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Empty fields ("" or "--") are greyed out, anything else is left as is.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{}{RESET}", if value.trim().is_empty() { "--" } else { value })
    } else {
        value.to_string()
    }
}

/// Day counters: green when positive, grey when zero.
pub fn color_for_days(value: i64) -> &'static str {
    if value > 0 { GREEN } else { GREY }
}
