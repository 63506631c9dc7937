//! Log file written during a scan.
//!
//! The journal truncates its file when created and appends one line per
//! entry: `YYYY-MM-DD HH:MM:SS,mmm - LEVEL - message`. As a
//! `DiagnosticSink` it also keeps every diagnostic for report export.

use crate::core::sink::DiagnosticSink;
use crate::errors::AppResult;
use crate::models::{Diagnostic, Severity};
use crate::utils::time::log_timestamp;
use chrono::Local;
use std::fs::{self, File};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct Journal {
    path: PathBuf,
    writer: LineWriter<File>,
    diagnostics: Vec<Diagnostic>,
}

impl Journal {
    pub fn create(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        debug!("log file truncated: {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            writer: LineWriter::new(file),
            diagnostics: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        self.write_line(Severity::Info, message.as_ref());
    }

    pub fn warning(&mut self, message: impl AsRef<str>) {
        self.write_line(Severity::Warning, message.as_ref());
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        self.write_line(Severity::Error, message.as_ref());
    }

    /// A failed write is traced and otherwise ignored: losing a log line
    /// must not stop the batch.
    fn write_line(&mut self, level: Severity, message: &str) {
        let ts = log_timestamp(Local::now());
        if let Err(e) = writeln!(self.writer, "{ts} - {level} - {message}") {
            warn!("failed to write to {}: {e}", self.path.display());
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl DiagnosticSink for Journal {
    fn begin_file(&mut self, path: &Path) {
        self.info(format!("Checking file: {}", path.display()));
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        debug!("{diagnostic}");
        self.write_line(diagnostic.severity(), &diagnostic.message());
        self.diagnostics.push(diagnostic);
    }
}
