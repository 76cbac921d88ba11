use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::time_slice_type::TimeSliceType;

/// A contiguous interval of one category. `end == None` means the slice is
/// still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    #[serde(with = "timestamp", default)]
    pub start: Option<DateTime<Local>>,
    #[serde(with = "timestamp", default)]
    pub end: Option<DateTime<Local>>,
    #[serde(rename = "type")]
    pub kind: TimeSliceType,
}

impl TimeSlice {
    pub fn new(
        start: Option<DateTime<Local>>,
        end: Option<DateTime<Local>>,
        kind: TimeSliceType,
    ) -> Self {
        Self { start, end, kind }
    }

    /// An empty placeholder of the given type (no boundaries recorded yet).
    pub fn empty(kind: TimeSliceType) -> Self {
        Self::new(None, None, kind)
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Duration in ms, only when both boundaries are set.
    pub fn duration_ms(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((e - s).num_milliseconds()),
            _ => None,
        }
    }

    /// Key used to order slices inside a day: start, falling back to end.
    pub fn sort_key(&self) -> Option<DateTime<Local>> {
        self.start.or(self.end)
    }
}

/// Timestamps are written as epoch milliseconds. Reading accepts epoch
/// milliseconds (integer or float) as well as ISO-8601 / RFC 3339 strings.
pub mod timestamp {
    use super::*;
    use serde::{Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Float(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<DateTime<Local>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => s.serialize_some(&ts.timestamp_millis()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<DateTime<Local>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<RawTimestamp> = Option::deserialize(d)?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let parsed = match &raw {
            RawTimestamp::Millis(ms) => from_millis(*ms),
            RawTimestamp::Float(ms) => from_millis(ms.trunc() as i64),
            RawTimestamp::Text(s) => parse_text(s),
        };

        parsed.map(Some).ok_or_else(|| {
            serde::de::Error::custom(match raw {
                RawTimestamp::Text(s) => format!("unparseable timestamp '{s}'"),
                _ => "timestamp out of range".to_string(),
            })
        })
    }

    pub fn from_millis(ms: i64) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(ms).single()
    }

    /// Best-effort coercion of a textual timestamp.
    pub fn parse_text(s: &str) -> Option<DateTime<Local>> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Local));
        }

        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Local.from_local_datetime(&naive).earliest();
            }
        }

        s.parse::<i64>().ok().and_then(from_millis)
    }
}
