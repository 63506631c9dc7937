mod common;
use common::{duplicates, temp_dir, write_csv, write_raw};
use rdupcheck::core::{ScanSettings, check_file, scan_files};
use rdupcheck::models::{Diagnostic, DiagnosticKind, FileStatus, Severity};

#[test]
fn test_alice_repeat_within_three_minutes_is_flagged() {
    let dir = temp_dir();
    let path = write_csv(
        dir.path(),
        "att.csv",
        &["Alice,2024-01-01,09:00:00", "Alice,2024-01-01,09:03:00"],
    );

    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = check_file(&path, &ScanSettings::default(), &mut diags);

    assert!(report.had_duplicates());
    assert_eq!(report.events, 2);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity(), Severity::Warning);
    assert_eq!(diags[0].line(), Some(3));
    let msg = diags[0].message();
    assert!(msg.contains("Alice"));
    assert!(msg.contains("2024-01-01 09:03:00"));
    assert!(msg.contains("Previous mark: 2024-01-01 09:00:00"));
}

#[test]
fn test_bob_repeat_after_six_minutes_is_not_flagged() {
    let dir = temp_dir();
    let path = write_csv(
        dir.path(),
        "att.csv",
        &["Bob,2024-01-01,09:00:00", "Bob,2024-01-01,09:06:00"],
    );

    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = check_file(&path, &ScanSettings::default(), &mut diags);

    assert!(!report.had_duplicates());
    assert_eq!(report.status, FileStatus::Checked);
    assert!(diags.is_empty());
}

#[test]
fn test_header_only_file_has_no_events_and_no_diagnostics() {
    let dir = temp_dir();
    let path = write_csv(dir.path(), "att.csv", &[]);

    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = check_file(&path, &ScanSettings::default(), &mut diags);

    assert_eq!(report.events, 0);
    assert_eq!(report.status, FileStatus::Checked);
    assert!(!report.had_duplicates());
    assert!(diags.is_empty());
}

#[test]
fn test_missing_column_gives_one_structural_diagnostic() {
    let dir = temp_dir();
    let path = write_raw(
        dir.path(),
        "att.csv",
        b"text,date_utc\nAlice,2024-01-01\nAlice,2024-01-01\n",
    );

    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = check_file(&path, &ScanSettings::default(), &mut diags);

    assert_eq!(report.status, FileStatus::Rejected);
    assert_eq!(report.events, 0);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].is_structural());
    assert!(matches!(
        &diags[0].kind,
        DiagnosticKind::MissingColumns { missing, .. } if missing == &vec!["time_utc".to_string()]
    ));
}

#[test]
fn test_skipped_rows_do_not_touch_reference() {
    let dir = temp_dir();
    // the bad rows sit between two marks 6 minutes apart; if they reached
    // the detector the last mark would be a duplicate
    let path = write_csv(
        dir.path(),
        "att.csv",
        &[
            "Alice,2024-01-01,09:00:00",
            "Alice,,09:02:00",
            "Alice,2024-01-01,9h04",
            "Alice,2024-01-01,09:06:00",
        ],
    );

    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = check_file(&path, &ScanSettings::default(), &mut diags);

    assert_eq!(report.skipped, 2);
    assert_eq!(report.events, 2);
    assert!(!report.had_duplicates());
    assert!(matches!(diags[0].kind, DiagnosticKind::MissingData { .. }));
    assert!(matches!(diags[1].kind, DiagnosticKind::BadFormat { .. }));
    assert_eq!(diags[1].severity(), Severity::Error);
}

#[test]
fn test_burst_reports_both_repeats_against_first_mark() {
    let dir = temp_dir();
    let path = write_csv(
        dir.path(),
        "att.csv",
        &[
            "Alice,2024-01-01,09:00:00",
            "Alice,2024-01-01,09:01:00",
            "Alice,2024-01-01,09:02:00",
        ],
    );

    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = check_file(&path, &ScanSettings::default(), &mut diags);

    assert_eq!(report.duplicates, 2);
    for d in duplicates(&diags) {
        assert!(matches!(
            &d.kind,
            DiagnosticKind::Duplicate { previous_line: 2, .. }
        ));
    }
}

#[test]
fn test_unreadable_file_is_aborted_but_keeps_earlier_findings() {
    let dir = temp_dir();
    let mut content = b"text,date_utc,time_utc\n".to_vec();
    content.extend_from_slice(b"Alice,2024-01-01,09:00:00\nAlice,2024-01-01,09:01:00\n");
    content.extend_from_slice(b"\xff,2024-01-01,09:02:00\n");
    let path = write_raw(dir.path(), "att.csv", &content);

    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = check_file(&path, &ScanSettings::default(), &mut diags);

    assert_eq!(report.status, FileStatus::Aborted);
    assert!(report.had_duplicates());
    assert_eq!(diags.len(), 2);
    assert!(diags[0].is_duplicate());
    assert!(matches!(diags[1].kind, DiagnosticKind::Unreadable { .. }));
}

#[test]
fn test_missing_file_is_aborted() {
    let dir = temp_dir();
    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = check_file(
        &dir.path().join("gone.csv"),
        &ScanSettings::default(),
        &mut diags,
    );

    assert_eq!(report.status, FileStatus::Aborted);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message().starts_with("Error while processing file"));
}

#[test]
fn test_files_do_not_share_state() {
    let dir = temp_dir();
    let a = write_csv(dir.path(), "a.csv", &["Alice,2024-01-01,09:00:00"]);
    let b = write_csv(dir.path(), "b.csv", &["Alice,2024-01-01,09:01:00"]);

    let mut diags: Vec<Diagnostic> = Vec::new();
    let summary = scan_files(vec![a, b], &ScanSettings::default(), &mut diags);

    assert_eq!(summary.files.len(), 2);
    assert!(!summary.duplicates_found());
    assert!(diags.is_empty());
}

#[test]
fn test_batch_continues_after_bad_file() {
    let dir = temp_dir();
    let bad = write_raw(dir.path(), "a.csv", b"foo,bar\n1,2\n");
    let good = write_csv(
        dir.path(),
        "b.csv",
        &["Alice,2024-01-01,09:00:00", "Alice,2024-01-01,09:04:59"],
    );

    let mut diags: Vec<Diagnostic> = Vec::new();
    let summary = scan_files(vec![bad, good], &ScanSettings::default(), &mut diags);

    assert_eq!(summary.files[0].status, FileStatus::Rejected);
    assert!(summary.files[1].had_duplicates());
    assert!(summary.duplicates_found());
    assert_eq!(summary.files_with_duplicates(), 1);
    assert_eq!(summary.failed_files(), 1);
}

#[test]
fn test_rescan_is_idempotent() {
    let dir = temp_dir();
    let path = write_csv(
        dir.path(),
        "att.csv",
        &[
            "Alice,2024-01-01,09:00:00",
            "Alice,2024-01-01,09:03:00",
            "Bob,,09:03:00",
            "Bob,2024-01-01,09:04:00",
        ],
    );
    let settings = ScanSettings::default();

    let mut first: Vec<Diagnostic> = Vec::new();
    let mut second: Vec<Diagnostic> = Vec::new();
    let r1 = scan_files(vec![path.clone()], &settings, &mut first);
    let r2 = scan_files(vec![path], &settings, &mut second);

    assert_eq!(r1, r2);
    assert_eq!(first, second);
}

#[test]
fn test_wider_window_setting() {
    let dir = temp_dir();
    let path = write_csv(
        dir.path(),
        "att.csv",
        &["Bob,2024-01-01,09:00:00", "Bob,2024-01-01,09:06:00"],
    );
    let settings = ScanSettings::default()
        .with_window_minutes(10)
        .expect("valid window");

    let mut diags: Vec<Diagnostic> = Vec::new();
    assert!(check_file(&path, &settings, &mut diags).had_duplicates());
    assert!(ScanSettings::default().with_window_minutes(0).is_err());
}
