use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Every row was read.
    Checked,
    /// Header lacked a required column, no row was read.
    Rejected,
    /// Opening or reading failed part way.
    Aborted,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Checked => "checked",
            FileStatus::Rejected => "rejected",
            FileStatus::Aborted => "aborted",
        }
    }
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub events: usize,
    pub skipped: usize,
    pub duplicates: usize,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Checked,
            events: 0,
            skipped: 0,
            duplicates: 0,
        }
    }

    pub fn had_duplicates(&self) -> bool {
        self.duplicates > 0
    }
}

/// Aggregate over every file of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub files: Vec<FileReport>,
}

impl ScanSummary {
    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    pub fn duplicates_found(&self) -> bool {
        self.files.iter().any(FileReport::had_duplicates)
    }

    pub fn files_with_duplicates(&self) -> usize {
        self.files.iter().filter(|f| f.had_duplicates()).count()
    }

    pub fn total_duplicates(&self) -> usize {
        self.files.iter().map(|f| f.duplicates).sum()
    }

    pub fn total_events(&self) -> usize {
        self.files.iter().map(|f| f.events).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.files.iter().map(|f| f.skipped).sum()
    }

    pub fn failed_files(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status != FileStatus::Checked)
            .count()
    }
}
