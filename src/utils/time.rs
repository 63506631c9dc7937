//! Time utilities: duplicate window construction and log timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, TimeDelta};

/// Layout of the timestamp that opens each log line,
/// e.g. `2024-01-01 09:00:00,123`.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

pub fn window_from_minutes(minutes: i64) -> AppResult<TimeDelta> {
    if minutes < 1 {
        return Err(AppError::InvalidWindow(minutes));
    }
    TimeDelta::try_minutes(minutes).ok_or(AppError::InvalidWindow(minutes))
}

pub fn log_timestamp(now: DateTime<Local>) -> String {
    now.format(LOG_TIMESTAMP_FORMAT).to_string()
}

pub fn format_minutes(window: TimeDelta) -> String {
    let mins = window.num_minutes();
    if mins == 1 {
        "1 minute".to_string()
    } else {
        format!("{mins} minutes")
    }
}
