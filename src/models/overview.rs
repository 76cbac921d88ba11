use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use super::time_slice::TimeSlice;
use super::time_slice_type::TimeSliceType;

/// Fixed-shape summary of one day: the commute to work, the work span and
/// the commute home, plus the summed durations of those spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDayOverview {
    pub date: NaiveDate,
    pub start_to_work: Option<DateTime<Local>>,
    pub end_to_work: Option<DateTime<Local>>,
    pub start_work: Option<DateTime<Local>>,
    pub end_work: Option<DateTime<Local>>,
    pub start_to_home: Option<DateTime<Local>>,
    pub end_to_home: Option<DateTime<Local>>,
    pub work_time_ms: i64,
    pub drive_time_ms: i64,
}

impl WorkDayOverview {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            start_to_work: None,
            end_to_work: None,
            start_work: None,
            end_work: None,
            start_to_home: None,
            end_to_home: None,
            work_time_ms: 0,
            drive_time_ms: 0,
        }
    }

    pub fn transfer_before(&self) -> TimeSlice {
        TimeSlice::new(self.start_to_work, self.end_to_work, TimeSliceType::Transfer)
    }

    pub fn work(&self) -> TimeSlice {
        TimeSlice::new(self.start_work, self.end_work, TimeSliceType::Work)
    }

    pub fn transfer_after(&self) -> TimeSlice {
        TimeSlice::new(self.start_to_home, self.end_to_home, TimeSliceType::Transfer)
    }
}
