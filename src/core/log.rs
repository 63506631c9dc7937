use crate::errors::{AppError, AppResult};
use crate::models::Severity;
use ansi_term::Colour;
use regex::Regex;
use std::fs;
use std::path::Path;

/// One parsed line of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Severity,
    pub message: String,
}

fn line_regex() -> AppResult<Regex> {
    Regex::new(r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}) - (INFO|WARNING|ERROR) - (.*)$")
        .map_err(|e| AppError::Other(e.to_string()))
}

/// Color used for the level word
fn color_for_level(level: Severity) -> Colour {
    match level {
        Severity::Info => Colour::Blue,
        Severity::Warning => Colour::Yellow,
        Severity::Error => Colour::Red,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Parse a log file. Lines that do not follow the log layout (for
    /// instance a message spanning several lines) are appended to the
    /// previous entry.
    pub fn read_entries(path: &Path) -> AppResult<Vec<LogEntry>> {
        let content = fs::read_to_string(path)?;
        let re = line_regex()?;

        let mut entries: Vec<LogEntry> = Vec::new();
        for line in content.lines() {
            if let Some(caps) = re.captures(line)
                && let Some(level) = Severity::from_log_str(&caps[2])
            {
                entries.push(LogEntry {
                    timestamp: caps[1].to_string(),
                    level,
                    message: caps[3].to_string(),
                });
            } else if let Some(last) = entries.last_mut() {
                last.message.push('\n');
                last.message.push_str(line);
            }
        }

        Ok(entries)
    }

    pub fn print_log(path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Other(format!(
                "Log file not found: {} (run `rdupcheck scan` first)",
                path.display()
            )));
        }

        let entries = Self::read_entries(path)?;

        println!("📜 Log {}:\n", path.display());

        let level_w = entries
            .iter()
            .map(|e| e.level.as_str().len())
            .max()
            .unwrap_or(0);

        for entry in &entries {
            let color = color_for_level(entry.level);
            let padding = " ".repeat(level_w.saturating_sub(entry.level.as_str().len()));
            println!(
                "{} | {}{} | {}",
                entry.timestamp,
                color.paint(entry.level.as_str()),
                padding,
                entry.message
            );
        }

        let count = |level: Severity| entries.iter().filter(|e| e.level == level).count();
        println!(
            "\n{} entries: {} info, {} warning(s), {} error(s)",
            entries.len(),
            count(Severity::Info),
            count(Severity::Warning),
            count(Severity::Error)
        );

        Ok(())
    }
}
