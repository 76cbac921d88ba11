#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;

use rworkday::models::{TimeSlice, TimeSliceType, WorkDay};

/// Binary under test, with HOME pointed at a private directory so no real
/// configuration is read or written.
pub fn rwd(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rworkday");
    cmd.env("HOME", test_home(name));
    cmd.env("APPDATA", test_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Private home directory for one test.
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkday_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkday.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Local instant `hh:mm` on `day`.
pub fn at(day: NaiveDate, hh: u32, mm: u32) -> DateTime<Local> {
    let naive = day.and_hms_opt(hh, mm, 0).expect("valid time");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("local time exists")
}

pub fn slice(day: NaiveDate, from: (u32, u32), to: (u32, u32), kind: TimeSliceType) -> TimeSlice {
    TimeSlice::new(
        Some(at(day, from.0, from.1)),
        Some(at(day, to.0, to.1)),
        kind,
    )
}

/// 10.02.2024: commute 06:00–06:28, work 06:28–17:30, commute 17:30–17:56.
pub fn commuter_day() -> WorkDay {
    let d = date(2024, 2, 10);
    WorkDay::new(
        d,
        vec![
            slice(d, (6, 0), (6, 28), TimeSliceType::Transfer),
            slice(d, (6, 28), (17, 30), TimeSliceType::Work),
            slice(d, (17, 30), (17, 56), TimeSliceType::Transfer),
        ],
    )
}

/// Initialize a DB through the CLI (no config file written).
pub fn init_db(name: &str, db_path: &str) {
    rwd(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
