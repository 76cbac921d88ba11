//! Durable record store for work days.
//!
//! Days are keyed by the epoch ms of their local midnight. The slice list of
//! a day is stored as a JSON array; timestamps are written as epoch ms and
//! read back from either numbers or ISO strings.

use chrono::{Local, NaiveDate, TimeZone};
use rusqlite::params;
use std::collections::BTreeMap;
use tracing::debug;

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{TimeSlice, WorkDay};
use crate::utils::date::day_key;

/// Narrow persistence contract used by the core.
pub trait DayStore {
    /// Days whose key lies in `[from_key, to_key]`, ascending.
    fn get_days(&mut self, from_key: i64, to_key: i64) -> AppResult<Vec<WorkDay>>;

    /// Insert or replace the day under its key.
    fn put_day(&mut self, day: &WorkDay) -> AppResult<()>;

    /// Remove a day. Returns whether something was deleted.
    fn delete_day(&mut self, key: i64) -> AppResult<bool>;

    /// Audit trail hook; stores without one ignore it.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) {}

    fn get_days_between(&mut self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<WorkDay>> {
        self.get_days(day_key(from), day_key(to))
    }

    fn get_day(&mut self, date: NaiveDate) -> AppResult<Option<WorkDay>> {
        let key = day_key(date);
        Ok(self.get_days(key, key)?.into_iter().next())
    }

    fn get_all_days(&mut self) -> AppResult<Vec<WorkDay>> {
        self.get_days(i64::MIN, i64::MAX)
    }
}

/// SQLite backed store (table `work_days`).
pub struct SqliteDayStore {
    pool: DbPool,
}

impl SqliteDayStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_initialized(path)?))
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self::new(DbPool::in_memory()?))
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

/// Turn a stored row back into a `WorkDay`. The `date` column is only a
/// readable copy; when it cannot be parsed the key wins.
pub fn decode_row(key: i64, date: &str, slices_json: &str) -> AppResult<WorkDay> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            Local
                .timestamp_millis_opt(key)
                .single()
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| crate::errors::AppError::InvalidDate(format!("{date} (key {key})")))?;

    let slices: Vec<TimeSlice> = serde_json::from_str(slices_json)?;

    Ok(WorkDay::new(date, slices))
}

impl DayStore for SqliteDayStore {
    fn get_days(&mut self, from_key: i64, to_key: i64) -> AppResult<Vec<WorkDay>> {
        let raw: Vec<(i64, String, String)> = {
            let mut stmt = self.pool.conn.prepare_cached(
                "SELECT day_key, date, slices FROM work_days
                 WHERE day_key BETWEEN ?1 AND ?2
                 ORDER BY day_key ASC",
            )?;

            let rows = stmt.query_map(params![from_key, to_key], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?;

            let mut v = Vec::new();
            for r in rows {
                v.push(r?);
            }
            v
        };

        debug!("loaded {} day(s) in [{from_key}, {to_key}]", raw.len());

        raw.iter()
            .map(|(key, date, slices)| decode_row(*key, date, slices))
            .collect()
    }

    fn put_day(&mut self, day: &WorkDay) -> AppResult<()> {
        let slices = serde_json::to_string(&day.slices)?;

        self.pool.conn.execute(
            "INSERT INTO work_days (day_key, date, slices, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(day_key) DO UPDATE SET
                date = excluded.date,
                slices = excluded.slices,
                updated_at = excluded.updated_at",
            params![day.key(), day.date_str(), slices, Local::now().to_rfc3339()],
        )?;

        debug!("stored day {} ({} slices)", day.date_str(), day.slices.len());
        Ok(())
    }

    fn delete_day(&mut self, key: i64) -> AppResult<bool> {
        let n = self
            .pool
            .conn
            .execute("DELETE FROM work_days WHERE day_key = ?1", [key])?;
        Ok(n > 0)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        crate::db::log::ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}

/// Volatile store, handy for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryDayStore {
    days: BTreeMap<i64, WorkDay>,
}

impl MemoryDayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl DayStore for MemoryDayStore {
    fn get_days(&mut self, from_key: i64, to_key: i64) -> AppResult<Vec<WorkDay>> {
        if from_key > to_key {
            return Ok(Vec::new());
        }
        Ok(self.days.range(from_key..=to_key).map(|(_, d)| d.clone()).collect())
    }

    fn put_day(&mut self, day: &WorkDay) -> AppResult<()> {
        self.days.insert(day.key(), day.clone());
        Ok(())
    }

    fn delete_day(&mut self, key: i64) -> AppResult<bool> {
        Ok(self.days.remove(&key).is_some())
    }
}
