use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::AppError;

/// Category of a time slice. The numeric tag is what gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TimeSliceType {
    /// Commute (to or from the workplace)
    Transfer,
    Work,
    Pause,
}

impl TimeSliceType {
    pub const ALL: [TimeSliceType; 3] = [Self::Transfer, Self::Work, Self::Pause];

    /// Convert enum → stored tag
    pub fn tag(&self) -> u8 {
        match self {
            TimeSliceType::Transfer => 1,
            TimeSliceType::Work => 2,
            TimeSliceType::Pause => 3,
        }
    }

    /// Convert stored tag → enum
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(TimeSliceType::Transfer),
            2 => Some(TimeSliceType::Work),
            3 => Some(TimeSliceType::Pause),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSliceType::Transfer => "transfer",
            TimeSliceType::Work => "work",
            TimeSliceType::Pause => "pause",
        }
    }

    /// Index into fixed-size per-type tables.
    pub fn index(&self) -> usize {
        self.tag() as usize - 1
    }
}

impl TryFrom<u8> for TimeSliceType {
    type Error = AppError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(tag).ok_or(AppError::InvalidSliceType(tag))
    }
}

impl From<TimeSliceType> for u8 {
    fn from(kind: TimeSliceType) -> Self {
        kind.tag()
    }
}

impl fmt::Display for TimeSliceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
