use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::time_slice::TimeSlice;
use crate::utils::date::{day_key, local_midnight};

/// One calendar day with its recorded slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    pub date: NaiveDate,
    pub slices: Vec<TimeSlice>,
}

impl WorkDay {
    pub fn new(date: NaiveDate, slices: Vec<TimeSlice>) -> Self {
        Self { date, slices }
    }

    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, Vec::new())
    }

    /// Identity of the day: epoch ms of its local midnight.
    pub fn key(&self) -> i64 {
        day_key(self.date)
    }

    pub fn midnight(&self) -> DateTime<Local> {
        local_midnight(self.date)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Stable sort by start, falling back to end. Slices without any
    /// boundary stay at their index; the others are reordered around them.
    pub fn sort_slices(&mut self) {
        let positions: Vec<usize> = self
            .slices
            .iter()
            .enumerate()
            .filter(|(_, s)| s.sort_key().is_some())
            .map(|(i, _)| i)
            .collect();

        let mut keyed: Vec<TimeSlice> = positions.iter().map(|&i| self.slices[i].clone()).collect();
        keyed.sort_by_key(|s| s.sort_key());

        for (pos, slice) in positions.into_iter().zip(keyed) {
            self.slices[pos] = slice;
        }
    }
}
