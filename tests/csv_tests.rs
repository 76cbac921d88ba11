mod common;
use common::{commuter_day, date};

use rworkday::core::history::to_overview;
use rworkday::errors::AppError;
use rworkday::export::csv::{duration_cell, export_file_name, overviews_to_csv};
use rworkday::export::json::overviews_to_json;
use rworkday::export::{ExportFormat, ExportLogic, ExportOptions, MemorySink, parse_range};
use rworkday::db::store::{DayStore, MemoryDayStore};
use rworkday::models::WorkDayOverview;

#[test]
fn commuter_day_row() {
    let csv = overviews_to_csv(&[to_overview(&commuter_day())], ",").unwrap();
    let mut lines = csv.split_inclusive('\n');

    assert_eq!(
        lines.next(),
        Some("Date,Transfer-out,Work,Transfer-back,Work-hours,Transfer-hours\n")
    );

    let row = lines.next().unwrap();
    assert!(row.starts_with("10.02.2024,06:00 - 06:28,"), "{row}");
    assert!(row.ends_with('\n'));
    assert_eq!(
        row,
        "10.02.2024,06:00 - 06:28,06:28 - 17:30,17:30 - 17:56,11:20,00:54\n"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn minutes_are_padded_on_the_right() {
    assert_eq!(duration_cell(5 * 60_000), "00:50");
    assert_eq!(duration_cell((8 * 60 + 45) * 60_000), "08:45");
    assert_eq!(duration_cell(0), "00:00");
}

#[test]
fn missing_timestamps_are_empty() {
    let csv = overviews_to_csv(&[WorkDayOverview::empty(date(2024, 2, 11))], ";").unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(row, "11.02.2024; - ; - ; - ;00:00;00:00");
}

#[test]
fn separator_must_be_one_ascii_char() {
    for bad in ["", ";;", "é", "\n"] {
        assert!(
            matches!(overviews_to_csv(&[], bad), Err(AppError::InvalidSeparator(_))),
            "{bad:?}"
        );
    }
    assert!(overviews_to_csv(&[], "\t").is_ok());
}

#[test]
fn file_name_spans_oldest_to_newest() {
    let days = [
        WorkDayOverview::empty(date(2024, 2, 12)),
        WorkDayOverview::empty(date(2024, 2, 10)),
    ];
    assert_eq!(
        export_file_name(&days).as_deref(),
        Some("worktimes_2024_02_10-2024_02_12.csv")
    );
    assert_eq!(export_file_name(&[]), None);
}

#[test]
fn json_carries_totals() {
    let json = overviews_to_json(&[to_overview(&commuter_day())], 8 * 60 * 60_000).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(v[0]["total"], "11:56");
    assert_eq!(v[0]["overtime"], "+03:56");
    assert_eq!(v[0]["drive_time_ms"], 54 * 60_000);
    assert_eq!(v[0]["date"], "2024-02-10");
}

#[test]
fn export_goes_through_the_sink() {
    let mut store = MemoryDayStore::new();
    store.put_day(&commuter_day()).unwrap();

    let opts = ExportOptions {
        format: ExportFormat::Csv,
        separator: ",".into(),
        target_ms: 0,
        file_name: None,
    };
    let mut sink = MemorySink::default();

    let path = ExportLogic::export(&mut store, None, &opts, &mut sink).unwrap();

    assert_eq!(
        path.unwrap().to_string_lossy(),
        "worktimes_2024_02_10-2024_02_10.csv"
    );
    let text = String::from_utf8(sink.files[0].1.clone()).unwrap();
    assert!(text.contains("10.02.2024,06:00 - 06:28,"));

    let nothing = ExportLogic::export(
        &mut store,
        parse_range("2023").unwrap(),
        &opts,
        &mut sink,
    )
    .unwrap();
    assert!(nothing.is_none());
    assert_eq!(sink.files.len(), 1);
}

#[test]
fn range_syntax() {
    assert_eq!(parse_range("all").unwrap(), None);
    assert_eq!(
        parse_range("2024").unwrap(),
        Some((date(2024, 1, 1), date(2024, 12, 31)))
    );
    assert_eq!(
        parse_range("2024-02").unwrap(),
        Some((date(2024, 2, 1), date(2024, 2, 29)))
    );
    assert_eq!(
        parse_range("2024-02-10").unwrap(),
        Some((date(2024, 2, 10), date(2024, 2, 10)))
    );
    assert_eq!(
        parse_range("2023-11:2024-02").unwrap(),
        Some((date(2023, 11, 1), date(2024, 2, 29)))
    );
    assert!(matches!(parse_range("2024:2024-02"), Err(AppError::InvalidRange(_))));
    assert!(matches!(parse_range("2024-13"), Err(AppError::InvalidRange(_))));
    assert!(matches!(parse_range("2025:2024"), Err(AppError::InvalidRange(_))));
}

#[test]
fn export_rows_follow_history_order() {
    let mut store = MemoryDayStore::new();
    for (m, d) in [(1, 5), (2, 1), (1, 20), (2, 28)] {
        store
            .put_day(&rworkday::models::WorkDay::empty(date(2024, m, d)))
            .unwrap();
    }

    let dates: Vec<_> = ExportLogic::load(&mut store, None)
        .unwrap()
        .into_iter()
        .map(|o| o.date)
        .collect();

    assert_eq!(
        dates,
        vec![date(2024, 2, 28), date(2024, 2, 1), date(2024, 1, 20), date(2024, 1, 5)]
    );

    let opts = ExportOptions {
        format: ExportFormat::Csv,
        separator: ",".into(),
        target_ms: 0,
        file_name: None,
    };
    let mut sink = MemorySink::default();
    let path = ExportLogic::export(&mut store, None, &opts, &mut sink).unwrap();
    assert_eq!(
        path.unwrap().to_string_lossy(),
        "worktimes_2024_01_05-2024_02_28.csv"
    );
}
