/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::TimeSliceType;

/// Overtime color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_overtime(value_ms: i64) -> &'static str {
    if value_ms > 0 {
        GREEN
    } else if value_ms < 0 {
        RED
    } else {
        RESET
    }
}

/// Terminal colour of a slice category, mirrors the chart fills.
pub fn color_for_kind(kind: TimeSliceType) -> &'static str {
    match kind {
        TimeSliceType::Transfer => GREEN,
        TimeSliceType::Work => RED,
        TimeSliceType::Pause => GREY,
    }
}

/// Greys out empty cells ("" or "--:--"), leaves the rest untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "--:-- - --:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
