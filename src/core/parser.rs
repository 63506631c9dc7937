//! CSV → attendance events.
//!
//! A `RecordParser` is opened per file. Opening validates the header, then
//! the parser is iterated lazily: every data row comes out either as an
//! event or as a skipped row with its reason. A read error ends the
//! iteration after being yielded once.

use crate::errors::{AppError, AppResult};
use crate::models::event::parse_timestamp;
use crate::models::{AttendanceEvent, RawRecord};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Names of the three columns every attendance export must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredColumns {
    pub identifier: String,
    pub date: String,
    pub time: String,
}

impl Default for RequiredColumns {
    fn default() -> Self {
        Self {
            identifier: "text".to_string(),
            date: "date_utc".to_string(),
            time: "time_utc".to_string(),
        }
    }
}

impl RequiredColumns {
    pub fn new(
        identifier: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        vec![self.identifier.clone(), self.date.clone(), self.time.clone()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Identifier, date or time empty after trimming.
    MissingData,
    /// Date and time present but not `YYYY-MM-DD HH:MM:SS`.
    BadFormat,
}

#[derive(Debug, Clone)]
pub enum ParsedRow {
    Event(AttendanceEvent),
    Skipped { reason: SkipReason, record: RawRecord },
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    identifier: usize,
    date: usize,
    time: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord, columns: &RequiredColumns) -> AppResult<Self> {
        // a repeated header name resolves to its last occurrence
        let find = |name: &str| headers.iter().collect::<Vec<_>>().into_iter().rposition(|h| h == name);

        match (
            find(&columns.identifier),
            find(&columns.date),
            find(&columns.time),
        ) {
            (Some(identifier), Some(date), Some(time)) => Ok(Self {
                identifier,
                date,
                time,
            }),
            _ => {
                let missing = columns
                    .names()
                    .into_iter()
                    .filter(|name| find(name).is_none())
                    .collect();
                Err(AppError::MissingColumns(missing))
            }
        }
    }
}

pub struct RecordParser {
    path: PathBuf,
    reader: Reader<File>,
    headers: StringRecord,
    index: ColumnIndex,
    row: StringRecord,
    done: bool,
}

impl RecordParser {
    /// Open `path` and check its header.
    ///
    /// Fails with `AppError::MissingColumns` when a required column is
    /// absent, or with an I/O / CSV error when the file cannot be read.
    pub fn open(path: &Path, columns: &RequiredColumns) -> AppResult<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

        let headers: StringRecord = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches(UTF8_BOM) } else { h })
            .collect();

        let index = ColumnIndex::locate(&headers, columns)?;
        debug!(
            "{}: columns located at {}/{}/{}",
            path.display(),
            index.identifier,
            index.date,
            index.time
        );

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            headers,
            index,
            row: StringRecord::new(),
            done: false,
        })
    }

    fn field(&self, i: usize) -> &str {
        self.row.get(i).map(str::trim).unwrap_or_default()
    }

    fn classify(&self) -> ParsedRow {
        let line = self.row.position().map(|p| p.line()).unwrap_or_default();
        let record = RawRecord::from_parts(line, &self.headers, &self.row);

        let identifier = self.field(self.index.identifier);
        let date = self.field(self.index.date);
        let time = self.field(self.index.time);

        if identifier.is_empty() || date.is_empty() || time.is_empty() {
            debug!("{}: line {line} has missing data", self.path.display());
            return ParsedRow::Skipped {
                reason: SkipReason::MissingData,
                record,
            };
        }

        match parse_timestamp(date, time) {
            Ok(timestamp) => ParsedRow::Event(AttendanceEvent::new(identifier, timestamp, record)),
            Err(e) => {
                debug!(
                    "{}: line {line} has bad date/time '{date} {time}': {e}",
                    self.path.display()
                );
                ParsedRow::Skipped {
                    reason: SkipReason::BadFormat,
                    record,
                }
            }
        }
    }
}

impl Iterator for RecordParser {
    type Item = AppResult<ParsedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_record(&mut self.row) {
            Ok(true) => Some(Ok(self.classify())),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(AppError::from(e)))
            }
        }
    }
}
