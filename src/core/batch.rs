//! A whole run: discovery, journal, per-file checks and the final verdict.

use crate::core::discovery::discover_csv_files;
use crate::core::journal::Journal;
use crate::core::notify::Notifier;
use crate::core::scan::{ScanSettings, scan_files};
use crate::errors::{AppError, AppResult};
use crate::models::{Diagnostic, ScanSummary};
use std::path::Path;

pub struct Batch {
    summary: ScanSummary,
    journal: Journal,
}

impl Batch {
    /// Truncate the log at `log_path`, then check every CSV file of `target`.
    ///
    /// A missing target is logged and returned as `DataDirNotFound`. Per-file
    /// problems never make this fail.
    pub fn run(target: &Path, settings: &ScanSettings, log_path: &Path) -> AppResult<Self> {
        let mut journal = Journal::create(log_path)?;

        let files = match discover_csv_files(target) {
            Ok(files) => files,
            Err(e @ AppError::DataDirNotFound(_)) => {
                journal.error(format!("Folder '{}' not found.", target.display()));
                return Err(e);
            }
            Err(e) => {
                journal.error(e.to_string());
                return Err(e);
            }
        };

        if files.is_empty() {
            journal.info(format!(
                "No CSV files to process in folder '{}'.",
                target.display()
            ));
        }

        let summary = scan_files(files, settings, &mut journal);

        Ok(Self { summary, journal })
    }

    pub fn summary(&self) -> &ScanSummary {
        &self.summary
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.journal.diagnostics()
    }

    pub fn log_path(&self) -> &Path {
        self.journal.path()
    }

    /// Hand duplicates to `notifier`, or log that there were none.
    /// Does nothing when no file was scanned.
    pub fn conclude(&mut self, notifier: &mut dyn Notifier) -> AppResult<()> {
        if self.summary.files.is_empty() {
            return Ok(());
        }

        if self.summary.duplicates_found() {
            notifier.notify(&self.summary, &mut self.journal)
        } else {
            self.journal
                .info("No repeated marks found in the processed files.");
            Ok(())
        }
    }
}
