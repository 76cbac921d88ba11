use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("'{r}': {why}"))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(y, m, 1)?;
    let next = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn bounds_of(part: &str, whole: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match part.len() {
        4 => {
            let y: i32 = part.parse().map_err(|_| invalid(whole, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(whole, "invalid year"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(whole, "invalid year"))?;
            Ok((d1, d2))
        }
        7 => {
            let (y, m) = part
                .split_once('-')
                .ok_or_else(|| invalid(whole, "expected YYYY-MM"))?;
            let y: i32 = y.parse().map_err(|_| invalid(whole, "invalid year"))?;
            let m: u32 = m.parse().map_err(|_| invalid(whole, "invalid month"))?;
            let last = month_last_day(y, m).ok_or_else(|| invalid(whole, "invalid month"))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(whole, "invalid month"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| invalid(whole, "invalid month"))?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(part, "%Y-%m-%d")
                .map_err(|_| invalid(whole, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(whole, "unsupported format")),
    }
}

/// Parse `--range` / `--period`.
///
/// Supports `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `start:end` pairs of the
/// same shape. `all` yields `None`.
pub fn parse_range(r: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let r = r.trim();

    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (from, to) = match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(invalid(r, "start and end must have the same format"));
            }
            (bounds_of(start, r)?.0, bounds_of(end, r)?.1)
        }
        None => bounds_of(r, r)?,
    };

    if from > to {
        return Err(invalid(r, "start is after end"));
    }

    Ok(Some((from, to)))
}
