//! Per-file duplicate check and the batch loop over many files.

use crate::config::Config;
use crate::core::detector::{DEFAULT_WINDOW_MINUTES, DuplicateDetector, Verdict};
use crate::core::parser::{ParsedRow, RecordParser, RequiredColumns, SkipReason};
use crate::core::sink::DiagnosticSink;
use crate::errors::{AppError, AppResult};
use crate::models::{Diagnostic, DiagnosticKind, FileReport, FileStatus, ScanSummary};
use crate::utils::time::window_from_minutes;
use chrono::TimeDelta;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub columns: RequiredColumns,
    pub window: TimeDelta,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            columns: RequiredColumns::default(),
            window: TimeDelta::minutes(DEFAULT_WINDOW_MINUTES),
        }
    }
}

impl ScanSettings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            columns: cfg.required_columns(),
            window: window_from_minutes(cfg.duplicate_window_minutes)?,
        })
    }

    pub fn with_window_minutes(mut self, minutes: i64) -> AppResult<Self> {
        self.window = window_from_minutes(minutes)?;
        Ok(self)
    }
}

/// Check one file, sending every diagnostic to `sink`.
///
/// Never fails: structural problems end up in the report status and in a
/// diagnostic. Findings made before a read error are kept.
pub fn check_file<S: DiagnosticSink + ?Sized>(
    path: &Path,
    settings: &ScanSettings,
    sink: &mut S,
) -> FileReport {
    let mut report = FileReport::new(path);

    let parser = match RecordParser::open(path, &settings.columns) {
        Ok(parser) => parser,
        Err(AppError::MissingColumns(missing)) => {
            sink.emit(Diagnostic::new(
                path,
                DiagnosticKind::MissingColumns {
                    required: settings.columns.names(),
                    missing,
                },
            ));
            report.status = FileStatus::Rejected;
            return report;
        }
        Err(e) => {
            sink.emit(unreadable(path, &e));
            report.status = FileStatus::Aborted;
            return report;
        }
    };

    let mut detector = DuplicateDetector::new(settings.window);

    for row in parser {
        match row {
            Ok(ParsedRow::Event(event)) => {
                report.events += 1;
                if let Verdict::Duplicate {
                    previous,
                    previous_line,
                } = detector.observe(&event)
                {
                    report.duplicates += 1;
                    sink.emit(Diagnostic::new(
                        path,
                        DiagnosticKind::Duplicate {
                            identifier: event.identifier,
                            timestamp: event.timestamp,
                            previous,
                            line: event.record.line,
                            previous_line,
                        },
                    ));
                }
            }
            Ok(ParsedRow::Skipped { reason, record }) => {
                report.skipped += 1;
                let kind = match reason {
                    SkipReason::MissingData => DiagnosticKind::MissingData { record },
                    SkipReason::BadFormat => DiagnosticKind::BadFormat { record },
                };
                sink.emit(Diagnostic::new(path, kind));
            }
            Err(e) => {
                sink.emit(unreadable(path, &e));
                report.status = FileStatus::Aborted;
                break;
            }
        }
    }

    debug!(
        "{}: {} events, {} skipped, {} duplicates, {} identifiers",
        path.display(),
        report.events,
        report.skipped,
        report.duplicates,
        detector.tracked()
    );

    report
}

fn unreadable(path: &Path, e: &AppError) -> Diagnostic {
    Diagnostic::new(
        path,
        DiagnosticKind::Unreadable {
            reason: e.to_string(),
        },
    )
}

/// Check every file in order. Each file gets its own detector, so nothing
/// carries over from one file to the next.
pub fn scan_files<I, S>(files: I, settings: &ScanSettings, sink: &mut S) -> ScanSummary
where
    I: IntoIterator<Item = PathBuf>,
    S: DiagnosticSink + ?Sized,
{
    let mut summary = ScanSummary::default();

    for path in files {
        sink.begin_file(&path);
        summary.push(check_file(&path, settings, sink));
    }

    info!(
        "scanned {} file(s), {} with duplicates",
        summary.files.len(),
        summary.files_with_duplicates()
    );

    summary
}
