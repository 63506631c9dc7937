pub mod diagnostic;
pub mod event;
pub mod record;
pub mod report;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use event::AttendanceEvent;
pub use record::RawRecord;
pub use report::{FileReport, FileStatus, ScanSummary};
