use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

/// Figures shown by `db --info`.
#[derive(Debug, Default, PartialEq)]
pub struct DbStats {
    pub days: i64,
    pub slices: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect_stats(pool: &DbPool) -> AppResult<DbStats> {
    let days: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM work_days", [], |row| row.get(0))?;

    let slices: i64 = pool.conn.query_row(
        "SELECT IFNULL(SUM(json_array_length(slices)), 0) FROM work_days",
        [],
        |row| row.get(0),
    )?;

    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_days ORDER BY day_key ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_days ORDER BY day_key DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbStats {
        days,
        slices,
        first_date,
        last_date,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let stats = collect_stats(pool)?;

    //
    // 2) TOTALS
    //
    println!("{}• Days:{} {}{}{}", CYAN, RESET, GREEN, stats.days, RESET);
    println!("{}• Slices:{} {}{}{}", CYAN, RESET, GREEN, stats.slices, RESET);

    //
    // 3) DATE RANGE
    //
    let fmt_first = stats
        .first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = stats
        .last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) COVERAGE
    //
    if let (Some(f), Some(l)) = (stats.first_date, stats.last_date)
        && let (Ok(d1), Ok(d2)) = (
            NaiveDate::parse_from_str(&f, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&l, "%Y-%m-%d"),
        )
    {
        let span = (d2 - d1).num_days() + 1;
        let coverage = stats.days as f64 / span.max(1) as f64 * 100.0;
        println!("{}• Tracked days:{} {:.0}% of the range", CYAN, RESET, coverage);
    }

    //
    // 5) SCHEMA
    //
    let versions = applied_versions(&pool.conn)?;
    println!(
        "{}• Schema:{} {}",
        CYAN,
        RESET,
        versions.last().map(String::as_str).unwrap_or("--")
    );

    println!();
    Ok(())
}
