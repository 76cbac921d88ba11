use chrono::{DateTime, Local};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::errors::{AppError, AppResult};
use crate::models::WorkDayOverview;
use crate::utils::date::{format_date, format_day};
use crate::utils::time::split;

pub const HEADER: [&str; 6] = [
    "Date",
    "Transfer-out",
    "Work",
    "Transfer-back",
    "Work-hours",
    "Transfer-hours",
];

/// Single ASCII byte, as the csv writer wants it.
pub fn separator_byte(sep: &str) -> AppResult<u8> {
    match sep.as_bytes() {
        [b] if b.is_ascii() && *b != b'\n' && *b != b'\r' => Ok(*b),
        _ => Err(AppError::InvalidSeparator(sep.to_string())),
    }
}

fn span(start: Option<&DateTime<Local>>, end: Option<&DateTime<Local>>) -> String {
    format!(
        "{} - {}",
        format_date(start, "HH:mm"),
        format_date(end, "HH:mm")
    )
}

/// `HH:m0`: hours zero padded, minutes padded on the right. Existing
/// exports were written this way and spreadsheets built on them expect it.
pub fn duration_cell(ms: i64) -> String {
    let p = split(ms);
    format!("{:02}:{:0<2}", p.hours, p.minutes)
}

fn row(ov: &WorkDayOverview) -> [String; 6] {
    [
        format_day(ov.date, "dd.MM.yyyy"),
        span(ov.start_to_work.as_ref(), ov.end_to_work.as_ref()),
        span(ov.start_work.as_ref(), ov.end_work.as_ref()),
        span(ov.start_to_home.as_ref(), ov.end_to_home.as_ref()),
        duration_cell(ov.work_time_ms),
        duration_cell(ov.drive_time_ms),
    ]
}

/// Render the overviews as CSV text. Fields are never quoted.
pub fn overviews_to_csv(overviews: &[WorkDayOverview], sep: &str) -> AppResult<String> {
    let delimiter = separator_byte(sep)?;

    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(HEADER)?;
    for ov in overviews {
        wtr.write_record(row(ov))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

/// `worktimes_yyyy_MM_dd-yyyy_MM_dd.csv` spanning the oldest and newest
/// exported day.
pub fn export_file_name(overviews: &[WorkDayOverview]) -> Option<String> {
    let first = overviews.iter().map(|o| o.date).min()?;
    let last = overviews.iter().map(|o| o.date).max()?;

    Some(format!(
        "worktimes_{}-{}.csv",
        format_day(first, "yyyy_MM_dd"),
        format_day(last, "yyyy_MM_dd")
    ))
}
