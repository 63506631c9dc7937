use super::record::RawRecord;
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;
use thiserror::Error;

/// Textual layout of the combined `date time` value.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A validated check-in: non-empty identifier plus a parsed timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub identifier: String, // trimmed, never empty
    pub timestamp: NaiveDateTime,
    pub record: RawRecord, // row the event came from
}

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    #[error("year must be written as four unsigned digits")]
    Year,

    #[error("second 60 is not a valid time")]
    LeapSecond,
}

/// Join trimmed date and time with a single space and parse them as
/// `YYYY-MM-DD HH:MM:SS`.
///
/// Stricter than chrono's `%Y`/`%S`: signed or out-of-range years
/// (outside 1..=9999) and leap seconds are rejected.
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, TimestampError> {
    if date.starts_with(['+', '-']) {
        return Err(TimestampError::Year);
    }

    let timestamp = NaiveDateTime::parse_from_str(&format!("{date} {time}"), TIMESTAMP_FORMAT)?;

    if !(1..=9999).contains(&timestamp.year()) {
        return Err(TimestampError::Year);
    }
    // chrono encodes second 60 as an extra second of nanoseconds
    if timestamp.nanosecond() >= 1_000_000_000 {
        return Err(TimestampError::LeapSecond);
    }

    Ok(timestamp)
}

impl AttendanceEvent {
    pub fn new(identifier: impl Into<String>, timestamp: NaiveDateTime, record: RawRecord) -> Self {
        Self {
            identifier: identifier.into(),
            timestamp,
            record,
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn line(&self) -> u64 {
        self.record.line
    }
}
