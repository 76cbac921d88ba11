//! Layout of the daily timeline chart.
//!
//! Every day gets a row made of a header line, a bar with one rectangle per
//! closed slice, and an hour axis underneath. All coordinates live in a fixed
//! 1000 × 1000 view box; the output is a pure function of the input days and
//! the display window.

use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::models::{TimeSlice, TimeSliceType, WorkDay};
use crate::utils::date::{format_day, time_of_day_ms};
use crate::utils::time::{MS_PER_MINUTE, format_hh_mm, parse_minute_of_day};

pub const VIEW_BOX_X_MIN: f64 = 0.0;
pub const VIEW_BOX_Y_MIN: f64 = 0.0;
pub const VIEW_BOX_X_MAX: f64 = 1000.0;
pub const VIEW_BOX_Y_MAX: f64 = 1000.0;

pub const HEADER_HEIGHT: f64 = 40.0;
pub const TIME_BAR_HEIGHT: f64 = 60.0;
pub const BOTTOM_AXIS_HEIGHT: f64 = 30.0;
pub const BOTTOM_AXIS_TOP_MARGIN: f64 = 5.0;
pub const LEFT_PADDING: f64 = 10.0;
pub const RIGHT_PADDING: f64 = 10.0;
/// Gap between a bar and the axis below it.
pub const TIME_BAR_PADDING: f64 = 5.0;
pub const TICK_LENGTH: f64 = 5.0;
pub const TICK_TEXT_HEIGHT: f64 = BOTTOM_AXIS_HEIGHT - TICK_LENGTH;

pub const ROW_HEIGHT: f64 = HEADER_HEIGHT + TIME_BAR_HEIGHT + BOTTOM_AXIS_HEIGHT;
pub const DRAWABLE_WIDTH: f64 = VIEW_BOX_X_MAX - (LEFT_PADDING + RIGHT_PADDING);

pub const TRANSFER_FILL: &str = "#00FF00";
pub const WORK_FILL: &str = "#FF0000";
pub const FALLBACK_FILL: &str = "#B0B0B0";

const MINUTES_IN_DAY: u32 = 24 * 60;

/// Bar colour per slice category; categories without a colour of their own
/// fall back to grey.
pub fn color_for(kind: TimeSliceType) -> &'static str {
    match kind {
        TimeSliceType::Transfer => TRANSFER_FILL,
        TimeSliceType::Work => WORK_FILL,
        _ => FALLBACK_FILL,
    }
}

/// Visible minute-of-day range `[min_minute, max_minute)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    min_minute: u32,
    max_minute: u32,
}

impl Default for DisplayWindow {
    /// 05:30 – 18:30
    fn default() -> Self {
        Self {
            min_minute: 5 * 60 + 30,
            max_minute: 18 * 60 + 30,
        }
    }
}

impl DisplayWindow {
    pub fn new(min_minute: u32, max_minute: u32) -> AppResult<Self> {
        if max_minute > MINUTES_IN_DAY || max_minute <= min_minute {
            return Err(AppError::InvalidWindow(format!(
                "{min_minute}..{max_minute} is not a range inside one day"
            )));
        }
        if (max_minute - min_minute) / 60 == 0 {
            return Err(AppError::InvalidWindow(
                "the window must span at least one hour".into(),
            ));
        }

        Ok(Self {
            min_minute,
            max_minute,
        })
    }

    /// Build from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        Self::new(parse_minute_of_day(start)?, parse_minute_of_day(end)?)
    }

    pub fn min_minute(&self) -> u32 {
        self.min_minute
    }

    pub fn max_minute(&self) -> u32 {
        self.max_minute
    }

    /// Whole hours covered by the window.
    pub fn hour_count(&self) -> u32 {
        (self.max_minute - self.min_minute) / 60
    }

    pub fn start_ms(&self) -> i64 {
        self.min_minute as i64 * MS_PER_MINUTE
    }

    pub fn window_ms(&self) -> i64 {
        (self.max_minute - self.min_minute) as i64 * MS_PER_MINUTE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub kind: TimeSliceType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub label: String,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub x_start: f64,
    pub y: f64,
    pub width: f64,
    pub tick_spacing: f64,
    pub ticks: Vec<Tick>,
}

/// Summed closed-slice durations per category, in ms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeTotals([i64; 3]);

impl TypeTotals {
    pub fn get(&self, kind: TimeSliceType) -> i64 {
        self.0[kind.index()]
    }

    fn add(&mut self, kind: TimeSliceType, ms: i64) {
        self.0[kind.index()] += ms;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub totals: TypeTotals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub date: NaiveDate,
    pub y: f64,
    pub header: Header,
    pub axis: Axis,
    pub bars: Vec<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub view_box: (f64, f64, f64, f64),
    pub window: DisplayWindow,
    pub rows: Vec<DayRow>,
}

pub fn totals_by_type(slices: &[TimeSlice]) -> TypeTotals {
    let mut totals = TypeTotals::default();
    for s in slices {
        if let Some(ms) = s.duration_ms() {
            totals.add(s.kind, ms);
        }
    }
    totals
}

/// `dd.MM.yyyy - HH:MM` (work + commute), plus the commute share when any.
pub fn header_label(date: NaiveDate, totals: &TypeTotals) -> String {
    let work = totals.get(TimeSliceType::Work);
    let transfer = totals.get(TimeSliceType::Transfer);

    let mut text = format!(
        "{} - {}",
        format_day(date, "dd.MM.yyyy"),
        format_hh_mm(work + transfer)
    );

    if transfer > 0 {
        text.push_str(&format!(" (incl. {} commute)", format_hh_mm(transfer)));
    }

    text
}

fn header(row_y: f64, date: NaiveDate, slices: &[TimeSlice]) -> Header {
    let totals = totals_by_type(slices);

    Header {
        x: DRAWABLE_WIDTH / 2.0 + LEFT_PADDING,
        y: row_y + HEADER_HEIGHT - 5.0,
        text: header_label(date, &totals),
        totals,
    }
}

/// Hour axis whose top edge sits at `y_start`. The first tick is shifted by
/// the fractional hour of the window start.
pub fn axis(x_start: f64, y_start: f64, window: &DisplayWindow) -> Axis {
    let hour_count = window.hour_count();
    let tick_spacing = DRAWABLE_WIDTH / hour_count as f64;

    let min_hours = window.min_minute() as f64 / 60.0;
    let first_x = x_start + tick_spacing * min_hours.fract();
    let first_hour = min_hours.ceil() as u32;

    let line_y = y_start + BOTTOM_AXIS_TOP_MARGIN;

    let ticks = (0..hour_count)
        .map(|i| Tick {
            x: first_x + tick_spacing * i as f64,
            y_top: line_y - TICK_LENGTH,
            y_bottom: line_y,
            label: format!("{:02}:00", first_hour + i),
            label_y: y_start + TICK_TEXT_HEIGHT,
        })
        .collect();

    Axis {
        x_start,
        y: line_y,
        width: DRAWABLE_WIDTH,
        tick_spacing,
        ticks,
    }
}

/// Rectangle of a closed slice; `None` for open or boundary-less slices.
/// Slices outside the window are not clipped.
pub fn bar(slice: &TimeSlice, y: f64, window: &DisplayWindow) -> Option<Rect> {
    let (start, end) = (slice.start?, slice.end?);

    let x_per_ms = DRAWABLE_WIDTH / window.window_ms() as f64;
    let start_ms = time_of_day_ms(&start);
    let end_ms = time_of_day_ms(&end);

    Some(Rect {
        x: (start_ms - window.start_ms()) as f64 * x_per_ms + LEFT_PADDING,
        y,
        width: (end_ms - start_ms) as f64 * x_per_ms,
        height: TIME_BAR_HEIGHT - TIME_BAR_PADDING,
        fill: color_for(slice.kind),
        kind: slice.kind,
    })
}

/// Lay out `days` top to bottom in the given order.
pub fn layout(days: &[WorkDay], window: &DisplayWindow) -> Chart {
    let rows = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let row_y = VIEW_BOX_Y_MIN + ROW_HEIGHT * i as f64;

            DayRow {
                date: day.date,
                y: row_y,
                header: header(row_y, day.date, &day.slices),
                axis: axis(
                    VIEW_BOX_X_MIN + LEFT_PADDING,
                    row_y + HEADER_HEIGHT + TIME_BAR_HEIGHT,
                    window,
                ),
                bars: day
                    .slices
                    .iter()
                    .filter_map(|s| bar(s, row_y + HEADER_HEIGHT, window))
                    .collect(),
            }
        })
        .collect();

    Chart {
        view_box: (VIEW_BOX_X_MIN, VIEW_BOX_Y_MIN, VIEW_BOX_X_MAX, VIEW_BOX_Y_MAX),
        window: *window,
        rows,
    }
}
