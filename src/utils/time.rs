//! Time utilities: splitting signed durations, parsing HH:MM and duration
//! strings, formatting spans for tables and live displays.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// A duration broken into display units. Components are magnitudes; the sign
/// lives in `is_negative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeParts {
    pub is_negative: bool,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl TimeParts {
    /// Recompose the signed millisecond value.
    pub fn to_millis(&self) -> i128 {
        let magnitude = self.hours as i128 * MS_PER_HOUR as i128
            + self.minutes as i128 * MS_PER_MINUTE as i128
            + self.seconds as i128 * MS_PER_SECOND as i128
            + self.milliseconds as i128;

        if self.is_negative { -magnitude } else { magnitude }
    }
}

/// Split a signed millisecond duration into hours, minutes, seconds and
/// milliseconds. Division truncates toward zero so a negative input yields
/// a negative sign with positive components.
pub fn split(duration_ms: i64) -> TimeParts {
    let mut remaining = duration_ms;

    let hours = remaining / MS_PER_HOUR;
    remaining %= MS_PER_HOUR;

    let minutes = remaining / MS_PER_MINUTE;
    remaining %= MS_PER_MINUTE;

    let seconds = remaining / MS_PER_SECOND;
    remaining %= MS_PER_SECOND;

    TimeParts {
        is_negative: duration_ms < 0,
        hours: hours.unsigned_abs(),
        minutes: minutes.unsigned_abs(),
        seconds: seconds.unsigned_abs(),
        milliseconds: remaining.unsigned_abs(),
    }
}

/// `HH:MM`, both zero padded. The sign is dropped.
pub fn format_hh_mm(duration_ms: i64) -> String {
    let p = split(duration_ms);
    format!("{:02}:{:02}", p.hours, p.minutes)
}

/// `+HH:MM` for positive, `-HH:MM` for negative, `00:00` for zero.
pub fn format_signed_hh_mm(duration_ms: i64) -> String {
    let sign = if duration_ms > 0 {
        "+"
    } else if duration_ms < 0 {
        "-"
    } else {
        ""
    };

    format!("{sign}{}", format_hh_mm(duration_ms))
}

/// `H:MM:SS` used by the live elapsed-time display.
pub fn format_live_span(duration_ms: i64) -> String {
    let p = split(duration_ms);
    let sign = if p.is_negative { "-" } else { "" };
    format!("{sign}{}:{:02}:{:02}", p.hours, p.minutes, p.seconds)
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Minutes since midnight of an `HH:MM` string.
pub fn parse_minute_of_day(t: &str) -> AppResult<u32> {
    use chrono::Timelike;

    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Parse durations like `8h`, `8h45m`, `45m` or `8:45` into milliseconds.
pub fn parse_duration_ms(s: &str) -> AppResult<i64> {
    let raw = s.trim().to_lowercase();
    let invalid = || AppError::InvalidTime(s.to_string());

    if let Some((h, m)) = raw.split_once(':') {
        let h: i64 = h.parse().map_err(|_| invalid())?;
        let m: i64 = m.parse().map_err(|_| invalid())?;
        return h
            .checked_mul(MS_PER_HOUR)
            .zip(m.checked_mul(MS_PER_MINUTE))
            .and_then(|(h, m)| h.checked_add(m))
            .ok_or_else(invalid);
    }

    let mut total: i64 = 0;
    let mut digits = String::new();
    let mut matched = false;

    for c in raw.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'h' | 'm' => {
                let n: i64 = digits.parse().map_err(|_| invalid())?;
                let unit = if c == 'h' { MS_PER_HOUR } else { MS_PER_MINUTE };
                total = n
                    .checked_mul(unit)
                    .and_then(|ms| total.checked_add(ms))
                    .ok_or_else(invalid)?;
                digits.clear();
                matched = true;
            }
            ' ' => {}
            _ => return Err(invalid()),
        }
    }

    if !digits.is_empty() || !matched {
        return Err(invalid());
    }

    Ok(total)
}
