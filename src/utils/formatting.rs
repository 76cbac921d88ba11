//! Formatting utilities used for CLI outputs.

use chrono::{DateTime, Local};

use crate::utils::date::format_date;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `HH:MM`, or `--:--` when the timestamp is missing.
pub fn hh_mm_or_placeholder(ts: Option<&DateTime<Local>>) -> String {
    match ts {
        Some(_) => format_date(ts, "HH:mm"),
        None => "--:--".to_string(),
    }
}

/// `HH:MM - HH:MM` with placeholders for missing ends.
pub fn span_cell(start: Option<&DateTime<Local>>, end: Option<&DateTime<Local>>) -> String {
    format!(
        "{} - {}",
        hh_mm_or_placeholder(start),
        hh_mm_or_placeholder(end)
    )
}
