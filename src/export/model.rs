// src/export/model.rs

use crate::models::{Diagnostic, FileReport};
use serde::Serialize;

/// Flat row for the CSV report.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticExport {
    pub file: String,
    pub level: String,
    pub kind: String,
    pub line: Option<u64>,
    pub identifier: Option<String>,
    pub message: String,
}

impl From<&Diagnostic> for DiagnosticExport {
    fn from(d: &Diagnostic) -> Self {
        Self {
            file: d.file.display().to_string(),
            level: d.severity().as_str().to_string(),
            kind: d.kind_str().to_string(),
            line: d.line(),
            identifier: d.identifier().map(str::to_string),
            message: d.message(),
        }
    }
}

/// Whole JSON report.
#[derive(Serialize, Debug)]
pub struct ReportDocument<'a> {
    pub generated_at: String,
    pub duplicates_found: bool,
    pub total_events: usize,
    pub total_skipped: usize,
    pub total_duplicates: usize,
    pub files: &'a [FileReport],
    pub diagnostics: &'a [Diagnostic],
}
