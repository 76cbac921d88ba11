mod common;
use common::{at, commuter_day, date, slice};

use rworkday::core::chart::geometry::{DRAWABLE_WIDTH, LEFT_PADDING, ROW_HEIGHT};
use rworkday::core::chart::{ChartLogic, DisplayWindow, color_for, layout, render_svg, totals_by_type};
use rworkday::db::store::{DayStore, MemoryDayStore};
use rworkday::errors::AppError;
use rworkday::models::{TimeSlice, TimeSliceType, WorkDay};

const EPS: f64 = 1e-9;

#[test]
fn default_window_has_thirteen_ticks() {
    let window = DisplayWindow::new(330, 1110).unwrap();
    assert_eq!(window, DisplayWindow::default());
    assert_eq!(window.hour_count(), 13);

    let chart = layout(&[commuter_day()], &window);
    let axis = &chart.rows[0].axis;

    assert_eq!(axis.ticks.len(), 13);
    assert_eq!(axis.ticks[0].label, "06:00");
    assert_eq!(axis.ticks[12].label, "18:00");

    // 05:30 is half an hour before the first label
    let spacing = DRAWABLE_WIDTH / 13.0;
    assert!((axis.ticks[0].x - (LEFT_PADDING + spacing * 0.5)).abs() < EPS);
    assert!((axis.y - 105.0).abs() < EPS);
    assert!((axis.ticks[0].label_y - 125.0).abs() < EPS);
}

#[test]
fn slice_spanning_the_window_fills_the_width() {
    let d = date(2024, 2, 10);
    let window = DisplayWindow::default();
    let day = WorkDay::new(d, vec![slice(d, (5, 30), (18, 30), TimeSliceType::Work)]);

    let chart = layout(&[day], &window);
    let bar = &chart.rows[0].bars[0];

    assert!((bar.x - LEFT_PADDING).abs() < EPS);
    assert!((bar.width - DRAWABLE_WIDTH).abs() < EPS);
    assert!((bar.y - 40.0).abs() < EPS);
    assert!((bar.height - 55.0).abs() < EPS);
    assert_eq!(bar.fill, "#FF0000");
}

#[test]
fn rows_stack_and_open_slices_are_skipped() {
    let d1 = date(2024, 2, 9);
    let d2 = date(2024, 2, 10);
    let running = WorkDay::new(
        d2,
        vec![
            slice(d2, (6, 0), (6, 30), TimeSliceType::Transfer),
            TimeSlice::new(Some(at(d2, 6, 30)), None, TimeSliceType::Work),
        ],
    );
    let done = WorkDay::new(d1, vec![slice(d1, (7, 0), (8, 0), TimeSliceType::Pause)]);

    let chart = layout(&[done, running], &DisplayWindow::default());

    assert_eq!(chart.rows.len(), 2);
    assert!((chart.rows[1].y - ROW_HEIGHT).abs() < EPS);
    assert_eq!(chart.rows[1].bars.len(), 1);
    assert_eq!(chart.rows[1].header.totals.get(TimeSliceType::Work), 0);
    assert_eq!(chart.rows[0].bars[0].fill, "#B0B0B0");
}

#[test]
fn header_shows_total_and_commute() {
    let chart = layout(&[commuter_day()], &DisplayWindow::default());
    let header = &chart.rows[0].header;

    assert_eq!(header.text, "10.02.2024 - 11:56 (incl. 00:54 commute)");
    assert!((header.x - 500.0).abs() < EPS);
    assert!((header.y - 35.0).abs() < EPS);

    let d = date(2024, 2, 11);
    let no_commute = WorkDay::new(d, vec![slice(d, (8, 0), (9, 0), TimeSliceType::Work)]);
    let chart = layout(&[no_commute], &DisplayWindow::default());
    assert_eq!(chart.rows[0].header.text, "11.02.2024 - 01:00");
}

#[test]
fn totals_cover_only_closed_slices() {
    let totals = totals_by_type(&commuter_day().slices);
    assert_eq!(totals.get(TimeSliceType::Transfer), 54 * 60_000);
    assert_eq!(totals.get(TimeSliceType::Work), (11 * 60 + 2) * 60_000);
    assert_eq!(totals.get(TimeSliceType::Pause), 0);
}

#[test]
fn colors_per_type() {
    assert_eq!(color_for(TimeSliceType::Transfer), "#00FF00");
    assert_eq!(color_for(TimeSliceType::Work), "#FF0000");
    assert_eq!(color_for(TimeSliceType::Pause), "#B0B0B0");
}

#[test]
fn invalid_windows_are_rejected() {
    assert!(matches!(DisplayWindow::new(600, 600), Err(AppError::InvalidWindow(_))));
    assert!(matches!(DisplayWindow::new(600, 630), Err(AppError::InvalidWindow(_))));
    assert!(matches!(DisplayWindow::new(700, 600), Err(AppError::InvalidWindow(_))));
    assert!(DisplayWindow::parse("06:00", "07:00").is_ok());
    assert!(DisplayWindow::parse("6", "07:00").is_err());
}

#[test]
fn svg_has_one_rect_per_closed_slice() {
    let chart = layout(&[commuter_day()], &DisplayWindow::default());
    let svg = render_svg(&chart);

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 1000 1000""#));
    assert_eq!(svg.matches("<rect").count(), 3);
    assert!(svg.contains("10.02.2024 - 11:56"));
    assert!(svg.contains(">06:00</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn chart_logic_reads_recent_days() {
    let mut store = MemoryDayStore::new();
    store.put_day(&commuter_day()).unwrap();

    let old = date(2024, 1, 1);
    store
        .put_day(&WorkDay::new(old, vec![slice(old, (8, 0), (9, 0), TimeSliceType::Work)]))
        .unwrap();

    let chart = ChartLogic::build(&mut store, &DisplayWindow::default(), date(2024, 2, 12), 7).unwrap();

    assert_eq!(chart.rows.len(), 1);
    assert_eq!(chart.rows[0].date, date(2024, 2, 10));
}

#[test]
fn bars_outside_the_window_are_not_clipped() {
    let d = date(2024, 2, 10);
    let day = WorkDay::new(
        d,
        vec![
            slice(d, (4, 30), (6, 30), TimeSliceType::Transfer),
            slice(d, (18, 0), (20, 0), TimeSliceType::Transfer),
        ],
    );

    let chart = layout(&[day], &DisplayWindow::default());
    let per_minute = DRAWABLE_WIDTH / 780.0;
    let early = &chart.rows[0].bars[0];
    let late = &chart.rows[0].bars[1];

    assert!((early.x - (LEFT_PADDING - 60.0 * per_minute)).abs() < EPS);
    assert!(early.x < 0.0);
    assert!((early.width - 120.0 * per_minute).abs() < EPS);

    assert!((late.width - 120.0 * per_minute).abs() < EPS);
    assert!(late.x + late.width > LEFT_PADDING + DRAWABLE_WIDTH);
}

#[test]
fn chart_lookback_past_the_calendar_is_an_error() {
    let err = ChartLogic::build(
        &mut MemoryDayStore::new(),
        &DisplayWindow::default(),
        date(2024, 2, 10),
        u32::MAX,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));
}
