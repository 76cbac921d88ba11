use chrono::{DateTime, Local};
use std::fmt;
use tracing::{debug, info};

use crate::core::active_day::ActiveWorkDay;
use crate::core::clock::Clock;
use crate::core::history::to_overview;
use crate::core::status::DayStatus;
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::models::TimeSliceType;

/// A user transition on the tracked day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartTransfer,
    StartWork,
    EndWork,
    EndTransfer,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::StartTransfer => "start-transfer",
            Action::StartWork => "start-work",
            Action::EndWork => "end-work",
            Action::EndTransfer => "end-transfer",
        }
    }

    /// Slice type opened by the action, if it opens one.
    pub fn opens(&self) -> Option<TimeSliceType> {
        match self {
            Action::StartTransfer => Some(TimeSliceType::Transfer),
            Action::StartWork => Some(TimeSliceType::Work),
            Action::EndWork | Action::EndTransfer => None,
        }
    }

    /// End the previous slice, then start the next one when the action
    /// opens one.
    pub fn apply_at(&self, day: &mut ActiveWorkDay, now: DateTime<Local>) {
        day.close_current_if_open_at(now);

        if let Some(kind) = self.opens() {
            day.open_if_none_running_at(kind, now);
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// High-level logic behind the action commands.
pub struct ActionLogic;

impl ActionLogic {
    /// Today's active day: the stored one or a fresh empty day.
    pub fn load_today(store: &mut dyn DayStore, clock: &dyn Clock) -> AppResult<ActiveWorkDay> {
        let today = clock.now().date_naive();

        Ok(match store.get_day(today)? {
            Some(day) => ActiveWorkDay::from_work_day(day),
            None => ActiveWorkDay::new(today),
        })
    }

    pub fn status_of(day: &ActiveWorkDay) -> DayStatus {
        DayStatus::classify(&to_overview(day.work_day()))
    }

    /// Apply `action` to today and persist the result. The day is only
    /// returned once the write went through; on failure nothing is kept.
    pub fn run(
        store: &mut dyn DayStore,
        clock: &dyn Clock,
        action: Action,
    ) -> AppResult<ActiveWorkDay> {
        let mut day = Self::load_today(store, clock)?;
        let status = Self::status_of(&day);

        if !status.allows(action) {
            return Err(AppError::ActionNotAvailable { action, status });
        }

        let now = clock.now();
        action.apply_at(&mut day, now);
        debug!("{action} at {now}: {} slice(s)", day.slices().len());

        store.put_day(day.work_day())?;
        store.audit(
            action.as_str(),
            &day.work_day().date_str(),
            &format!("{} at {}", action, now.format("%H:%M:%S")),
        );
        info!("{action} recorded for {}", day.date());

        Ok(day)
    }
}
