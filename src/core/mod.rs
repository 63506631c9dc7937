pub mod batch;
pub mod config;
pub mod detector;
pub mod discovery;
pub mod journal;
pub mod log;
pub mod notify;
pub mod parser;
pub mod scan;
pub mod sink;

pub use detector::{DuplicateDetector, LastSeen, Verdict};
pub use parser::{ParsedRow, RecordParser, RequiredColumns, SkipReason};
pub use scan::{ScanSettings, check_file, scan_files};
pub use sink::DiagnosticSink;
