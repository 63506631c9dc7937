#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rdupcheck::models::Diagnostic;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "text,date_utc,time_utc";

/// Binary under test, isolated from the user's real configuration.
pub fn rdc(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rdupcheck");
    cmd.env("HOME", home).env("APPDATA", home).env_remove("RUST_LOG");
    cmd
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write a CSV made of `HEADER` plus `rows` (each row a full CSV line).
pub fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let mut content = String::from(HEADER);
    content.push('\n');
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    write_raw(dir, name, content.as_bytes())
}

pub fn write_raw(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

pub fn duplicates(diags: &[Diagnostic]) -> Vec<&Diagnostic> {
    diags.iter().filter(|d| d.is_duplicate()).collect()
}
