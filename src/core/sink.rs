use crate::models::Diagnostic;
use std::path::Path;

/// Where a scan sends its diagnostics. Owned by the caller of the scan.
pub trait DiagnosticSink {
    /// Called once before a file is checked.
    fn begin_file(&mut self, _path: &Path) {}

    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn begin_file(&mut self, path: &Path) {
        (**self).begin_file(path);
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}
