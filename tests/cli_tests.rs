use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rdc, temp_dir, write_csv};

fn data_with_duplicate(root: &std::path::Path) -> std::path::PathBuf {
    let data = root.join("Data");
    fs::create_dir(&data).expect("mkdir");
    write_csv(
        &data,
        "monday.csv",
        &["Alice,2024-01-01,09:00:00", "Alice,2024-01-01,09:03:00"],
    );
    write_csv(
        &data,
        "tuesday.csv",
        &["Bob,2024-01-02,09:00:00", "Bob,2024-01-02,09:06:00"],
    );
    data
}

#[test]
fn test_scan_flags_duplicates_and_writes_log() {
    let home = temp_dir();
    let data = data_with_duplicate(home.path());
    let log = home.path().join("duplicates_log.txt");

    rdc(home.path())
        .args(["--test", "--log"])
        .arg(&log)
        .arg("scan")
        .arg(&data)
        .assert()
        .success()
        .stdout(contains("monday.csv"))
        .stdout(contains("tuesday.csv"))
        .stdout(contains("Duplicates were found in 1 file(s)"));

    let content = fs::read_to_string(&log).expect("read log");
    assert!(content.contains("WARNING - Duplicate in file"));
    assert!(content.contains("Alice (2024-01-01 09:03:00). Previous mark: 2024-01-01 09:00:00"));
    assert!(!content.contains("Bob ("));
}

#[test]
fn test_scan_clean_folder() {
    let home = temp_dir();
    let data = home.path().join("Data");
    fs::create_dir(&data).expect("mkdir");
    write_csv(
        &data,
        "a.csv",
        &["Bob,2024-01-01,09:00:00", "Bob,2024-01-01,09:06:00"],
    );
    let log = home.path().join("run.log");

    rdc(home.path())
        .args(["--test", "--log"])
        .arg(&log)
        .arg("scan")
        .arg(&data)
        .assert()
        .success()
        .stdout(contains("No repeated marks found").and(contains("Duplicates were").not()));
}

#[test]
fn test_scan_strict_fails_on_duplicates() {
    let home = temp_dir();
    let data = data_with_duplicate(home.path());
    let log = home.path().join("run.log");

    rdc(home.path())
        .args(["--test", "--log"])
        .arg(&log)
        .arg("scan")
        .arg(&data)
        .args(["--no-prompt", "--strict"])
        .assert()
        .failure()
        .stderr(contains("Duplicates found in 1 file(s)"));
}

#[test]
fn test_scan_window_override() {
    let home = temp_dir();
    let data = data_with_duplicate(home.path());
    let log = home.path().join("run.log");

    rdc(home.path())
        .args(["--test", "--log"])
        .arg(&log)
        .arg("scan")
        .arg(&data)
        .args(["--window", "2", "--strict"])
        .assert()
        .success()
        .stdout(contains("No repeated marks found"));

    rdc(home.path())
        .args(["--test", "--log"])
        .arg(&log)
        .arg("scan")
        .arg(&data)
        .args(["--window", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid duplicate window"));
}

#[test]
fn test_scan_missing_folder_fails() {
    let home = temp_dir();
    let log = home.path().join("run.log");

    rdc(home.path())
        .args(["--test", "--log"])
        .arg(&log)
        .arg("scan")
        .arg(home.path().join("Data"))
        .assert()
        .failure()
        .stderr(contains("not found"));

    assert!(fs::read_to_string(&log).expect("log").contains("ERROR - Folder"));
}

#[test]
fn test_scan_writes_json_report() {
    let home = temp_dir();
    let data = data_with_duplicate(home.path());
    let report = home.path().join("report.json");

    rdc(home.path())
        .args(["--test", "--log"])
        .arg(home.path().join("run.log"))
        .arg("scan")
        .arg(&data)
        .arg("--report")
        .arg(&report)
        .args(["--format", "json", "--force"])
        .assert()
        .success()
        .stdout(contains("JSON report written"));

    let content = fs::read_to_string(&report).expect("read report");
    assert!(content.contains("\"duplicates_found\": true"));
    assert!(content.contains("monday.csv"));
}

#[test]
fn test_log_print_after_scan() {
    let home = temp_dir();
    let data = data_with_duplicate(home.path());
    let log = home.path().join("run.log");

    rdc(home.path())
        .args(["--test", "--log"])
        .arg(&log)
        .arg("scan")
        .arg(&data)
        .assert()
        .success();

    rdc(home.path())
        .arg("--log")
        .arg(&log)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Checking file:"))
        .stdout(contains("Duplicate in file"))
        .stdout(contains("1 warning(s)"));
}

#[test]
fn test_config_print_shows_defaults() {
    let home = temp_dir();

    rdc(home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("duplicate_window_minutes: 5"))
        .stdout(contains("identifier_column: text"))
        .stdout(contains("open_log: ask"));
}

#[test]
fn test_init_writes_config_file() {
    let home = temp_dir();

    rdc(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    if cfg!(not(target_os = "windows")) {
        let conf = home.path().join(".rdupcheck").join("rdupcheck.conf");
        let content = fs::read_to_string(conf).expect("config written");
        assert!(content.contains("data_dir: Data"));
    }
}
