//! Windowed duplicate detection for one file.
//!
//! Each identifier is either unseen or seen with a reference timestamp. An
//! event closer than the window to the reference is a duplicate and leaves
//! the reference untouched, so a burst of repeats is measured against its
//! first event rather than against the previous one.

use crate::models::{AttendanceEvent, RawRecord};
use chrono::{NaiveDateTime, TimeDelta};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

pub const DEFAULT_WINDOW_MINUTES: i64 = 5;

/// Reference point for an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSeen {
    pub timestamp: NaiveDateTime,
    pub record: RawRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// First event for the identifier in this file.
    First,
    /// At least one window after the reference, which now moves here.
    Distinct { previous: NaiveDateTime },
    /// Inside the window of the reference.
    Duplicate {
        previous: NaiveDateTime,
        previous_line: u64,
    },
}

impl Verdict {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Verdict::Duplicate { .. })
    }
}

#[derive(Debug, Clone)]
pub struct DuplicateDetector {
    window: TimeDelta,
    last_seen: HashMap<String, LastSeen>,
    duplicates: usize,
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new(TimeDelta::minutes(DEFAULT_WINDOW_MINUTES))
    }
}

impl DuplicateDetector {
    pub fn new(window: TimeDelta) -> Self {
        Self {
            window,
            last_seen: HashMap::new(),
            duplicates: 0,
        }
    }

    pub fn window(&self) -> TimeDelta {
        self.window
    }

    /// Classify `event` against the reference of its identifier.
    ///
    /// The gap is the signed difference `event - reference`; an event
    /// earlier than its reference therefore falls inside the window too.
    pub fn observe(&mut self, event: &AttendanceEvent) -> Verdict {
        match self.last_seen.entry(event.identifier.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(LastSeen {
                    timestamp: event.timestamp,
                    record: event.record.clone(),
                });
                Verdict::First
            }
            Entry::Occupied(mut slot) => {
                let seen = slot.get_mut();
                let gap = event.timestamp.signed_duration_since(seen.timestamp);

                if gap < self.window {
                    self.duplicates += 1;
                    debug!(
                        "{}: {} is {}s after reference {}",
                        event.identifier,
                        event.timestamp,
                        gap.num_seconds(),
                        seen.timestamp
                    );
                    Verdict::Duplicate {
                        previous: seen.timestamp,
                        previous_line: seen.record.line,
                    }
                } else {
                    let previous = seen.timestamp;
                    seen.timestamp = event.timestamp;
                    seen.record = event.record.clone();
                    Verdict::Distinct { previous }
                }
            }
        }
    }

    pub fn last_seen(&self, identifier: &str) -> Option<&LastSeen> {
        self.last_seen.get(identifier)
    }

    /// Number of distinct identifiers seen so far.
    pub fn tracked(&self) -> usize {
        self.last_seen.len()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn duplicates_found(&self) -> bool {
        self.duplicates > 0
    }
}
