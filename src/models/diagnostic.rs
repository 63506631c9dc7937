use super::event::TIMESTAMP_FORMAT;
use super::record::RawRecord;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Level word used in the log file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    pub fn from_log_str(s: &str) -> Option<Self> {
        match s {
            "INFO" => Some(Severity::Info),
            "WARNING" => Some(Severity::Warning),
            "ERROR" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened. Structural kinds end the file's scan, row kinds skip a
/// single row, `Duplicate` is a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },
    Unreadable {
        reason: String,
    },
    MissingData {
        record: RawRecord,
    },
    BadFormat {
        record: RawRecord,
    },
    Duplicate {
        identifier: String,
        timestamp: NaiveDateTime,
        previous: NaiveDateTime,
        line: u64,
        previous_line: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: PathBuf,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(file: impl Into<PathBuf>, kind: DiagnosticKind) -> Self {
        Self {
            file: file.into(),
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            DiagnosticKind::MissingColumns { .. }
            | DiagnosticKind::Unreadable { .. }
            | DiagnosticKind::BadFormat { .. } => Severity::Error,
            DiagnosticKind::MissingData { .. } | DiagnosticKind::Duplicate { .. } => {
                Severity::Warning
            }
        }
    }

    /// Short machine-friendly name of the kind, used in CSV reports.
    pub fn kind_str(&self) -> &'static str {
        match self.kind {
            DiagnosticKind::MissingColumns { .. } => "missing_columns",
            DiagnosticKind::Unreadable { .. } => "unreadable",
            DiagnosticKind::MissingData { .. } => "missing_data",
            DiagnosticKind::BadFormat { .. } => "bad_format",
            DiagnosticKind::Duplicate { .. } => "duplicate",
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Duplicate { .. })
    }

    pub fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticKind::MissingColumns { .. } | DiagnosticKind::Unreadable { .. }
        )
    }

    /// Source line the diagnostic refers to, when there is one.
    pub fn line(&self) -> Option<u64> {
        match &self.kind {
            DiagnosticKind::MissingData { record } | DiagnosticKind::BadFormat { record } => {
                Some(record.line)
            }
            DiagnosticKind::Duplicate { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            DiagnosticKind::Duplicate { identifier, .. } => Some(identifier),
            _ => None,
        }
    }

    /// Human-readable line written to the log file.
    pub fn message(&self) -> String {
        let file = self.file.display();
        match &self.kind {
            DiagnosticKind::MissingColumns { required, missing } => format!(
                "File {file} does not contain all required columns ({}); missing: {}.",
                required.join(", "),
                missing.join(", ")
            ),
            DiagnosticKind::Unreadable { reason } => {
                format!("Error while processing file {file}: {reason}")
            }
            DiagnosticKind::MissingData { record } => {
                format!("Missing data in file {file}: {record}")
            }
            DiagnosticKind::BadFormat { record } => {
                format!("Invalid date/time format in file {file}: {record}")
            }
            DiagnosticKind::Duplicate {
                identifier,
                timestamp,
                previous,
                ..
            } => format!(
                "Duplicate in file {file}: {identifier} ({}). Previous mark: {}",
                timestamp.format(TIMESTAMP_FORMAT),
                previous.format(TIMESTAMP_FORMAT)
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.severity(), self.message())
    }
}
