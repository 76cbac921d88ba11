//! The state machine of the day currently being tracked.
//!
//! A day is an ordered list of slices of which at most one is open, and the
//! open one is always the last. User actions are expressed as "close the
//! current slice" followed (optionally) by "open a slice of type X".

use chrono::{DateTime, Local, NaiveDate};

use crate::core::clock::Clock;
use crate::models::{TimeSlice, TimeSliceType, WorkDay};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWorkDay {
    day: WorkDay,
}

impl ActiveWorkDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            day: WorkDay::empty(date),
        }
    }

    /// Wrap a persisted day. Slices are sorted once here.
    pub fn from_work_day(mut day: WorkDay) -> Self {
        day.sort_slices();
        Self { day }
    }

    pub fn date(&self) -> NaiveDate {
        self.day.date
    }

    pub fn slices(&self) -> &[TimeSlice] {
        &self.day.slices
    }

    pub fn work_day(&self) -> &WorkDay {
        &self.day
    }

    pub fn into_work_day(self) -> WorkDay {
        self.day
    }

    /// Last slice of the day, if any.
    pub fn current_slice(&self) -> Option<&TimeSlice> {
        self.day.slices.last()
    }

    /// Whether a slice is currently running.
    pub fn is_running(&self) -> bool {
        self.current_slice().is_some_and(TimeSlice::is_open)
    }

    pub fn close_current_if_open(&mut self, clock: &dyn Clock) {
        self.close_current_if_open_at(clock.now());
    }

    /// Sets `end = now` on an open last slice. No-op otherwise.
    pub fn close_current_if_open_at(&mut self, now: DateTime<Local>) {
        if let Some(current) = self.day.slices.last_mut()
            && current.end.is_none()
        {
            current.end = Some(now);
        }
    }

    pub fn open_if_none_running(&mut self, kind: TimeSliceType, clock: &dyn Clock) {
        self.open_if_none_running_at(kind, clock.now());
    }

    /// Appends `{start: now, end: None, kind}` unless a slice is running.
    pub fn open_if_none_running_at(&mut self, kind: TimeSliceType, now: DateTime<Local>) {
        if !self.is_running() {
            self.day.slices.push(TimeSlice::new(Some(now), None, kind));
        }
    }
}
