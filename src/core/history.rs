//! History aggregation: day overviews, month groups, daily totals.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::models::{TimeSlice, TimeSliceType, WorkDay, WorkDayOverview};
use crate::utils::time::{format_hh_mm, format_signed_hh_mm};

/// Default daily target (8h45) used for overtime.
pub const DEFAULT_TARGET_MS: i64 = (8 * 60 + 45) * 60 * 1000;

/// Build the fixed-shape overview of a day.
///
/// Only the first Transfer (commute out), the first Work and the second
/// Transfer (commute home) are read; further slices of the same type are
/// ignored here.
pub fn to_overview(day: &WorkDay) -> WorkDayOverview {
    let transfers: Vec<&TimeSlice> = day
        .slices
        .iter()
        .filter(|s| s.kind == TimeSliceType::Transfer)
        .collect();
    let works: Vec<&TimeSlice> = day
        .slices
        .iter()
        .filter(|s| s.kind == TimeSliceType::Work)
        .collect();

    let mut out = WorkDayOverview::empty(day.date);

    if let Some(t) = transfers.first() {
        out.start_to_work = t.start;
        out.end_to_work = t.end;
        out.drive_time_ms += t.duration_ms().unwrap_or(0);
    }

    if let Some(w) = works.first() {
        out.start_work = w.start;
        out.end_work = w.end;
        out.work_time_ms += w.duration_ms().unwrap_or(0);
    }

    if let Some(t) = transfers.get(1) {
        out.start_to_home = t.start;
        out.end_to_home = t.end;
        out.drive_time_ms += t.duration_ms().unwrap_or(0);
    }

    out
}

/// All days of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    /// First day of the month.
    pub month: NaiveDate,
    pub days: Vec<WorkDayOverview>,
}

impl MonthGroup {
    pub fn work_time_ms(&self) -> i64 {
        self.days.iter().map(|d| d.work_time_ms).sum()
    }

    pub fn drive_time_ms(&self) -> i64 {
        self.days.iter().map(|d| d.drive_time_ms).sum()
    }
}

fn month_key(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Group overviews per month. Groups come newest first, and so do the rows
/// inside each group.
pub fn group_by_month(overviews: Vec<WorkDayOverview>) -> Vec<MonthGroup> {
    let mut index: HashMap<i32, usize> = HashMap::new();
    let mut groups: Vec<MonthGroup> = Vec::new();

    for ov in overviews {
        let key = month_key(ov.date);

        let slot = *index.entry(key).or_insert_with(|| {
            // day 1 of an existing date's month always exists
            let month = ov.date.with_day(1).unwrap_or(ov.date);
            groups.push(MonthGroup {
                month,
                days: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].days.push(ov);
    }

    groups.sort_by(|a, b| b.month.cmp(&a.month));
    for g in &mut groups {
        g.days.sort_by(|a, b| b.date.cmp(&a.date));
    }

    groups
}

/// Time spent on a day against the daily target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTimes {
    pub total_ms: i64,
    pub overtime_ms: i64,
    /// `HH:MM`
    pub total: String,
    /// `+HH:MM`, `-HH:MM` or `00:00`
    pub overtime: String,
}

/// Commute out + work + commute home, compared with `target_ms`.
pub fn day_times(ov: &WorkDayOverview, target_ms: i64) -> DayTimes {
    let total_ms = [ov.transfer_before(), ov.work(), ov.transfer_after()]
        .iter()
        .filter_map(TimeSlice::duration_ms)
        .sum::<i64>();

    let overtime_ms = total_ms - target_ms;

    DayTimes {
        total_ms,
        overtime_ms,
        total: format_hh_mm(total_ms),
        overtime: format_signed_hh_mm(overtime_ms),
    }
}

pub struct HistoryLogic;

impl HistoryLogic {
    /// Load days in the optional bounds and aggregate them per month.
    pub fn load(
        store: &mut dyn DayStore,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<MonthGroup>> {
        let days = match bounds {
            Some((from, to)) => store.get_days_between(from, to)?,
            None => store.get_all_days()?,
        };

        Ok(group_by_month(days.iter().map(to_overview).collect()))
    }

    /// Flatten groups back into rows, preserving the display order.
    pub fn rows(groups: &[MonthGroup]) -> Vec<WorkDayOverview> {
        groups.iter().flat_map(|g| g.days.iter().cloned()).collect()
    }
}
