// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ReportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DiagnosticExport, ReportDocument};
use crate::models::{Diagnostic, ScanSummary};
use chrono::Local;
use std::path::Path;

/// Report export of a finished scan.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the scan result to `file`.
    ///
    /// - `Csv`: one row per diagnostic
    /// - `Json`: totals, per-file reports and the full diagnostics
    pub fn export_report(
        summary: &ScanSummary,
        diagnostics: &[Diagnostic],
        format: ReportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        match format {
            ReportFormat::Csv => {
                let rows: Vec<DiagnosticExport> =
                    diagnostics.iter().map(DiagnosticExport::from).collect();
                export_csv(&rows, file)
            }
            ReportFormat::Json => {
                let doc = ReportDocument {
                    generated_at: Local::now().to_rfc3339(),
                    duplicates_found: summary.duplicates_found(),
                    total_events: summary.total_events(),
                    total_skipped: summary.total_skipped(),
                    total_duplicates: summary.total_duplicates(),
                    files: &summary.files,
                    diagnostics,
                };
                export_json(&doc, file)
            }
        }
    }
}
