//! End-of-run notification when duplicates were found.

use crate::config::OpenLogPolicy;
use crate::core::journal::Journal;
use crate::errors::{AppError, AppResult};
use crate::models::ScanSummary;
use crate::ui::messages::{confirm, error, info, warning};
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub trait Notifier {
    /// Tell the operator that `summary` contains duplicates. The journal is
    /// still open so failures can be logged.
    fn notify(&mut self, summary: &ScanSummary, journal: &mut Journal) -> AppResult<()>;
}

/// Terminal notifier: warns, then opens the log according to the policy.
pub struct ConsoleNotifier {
    policy: OpenLogPolicy,
    interactive: bool,
}

impl ConsoleNotifier {
    pub fn new(policy: OpenLogPolicy, interactive: bool) -> Self {
        Self {
            policy,
            interactive,
        }
    }

    fn should_open(&self) -> AppResult<bool> {
        match self.policy {
            OpenLogPolicy::Never => Ok(false),
            OpenLogPolicy::Always => Ok(true),
            OpenLogPolicy::Ask if self.interactive => confirm("Open the log file?"),
            OpenLogPolicy::Ask => Ok(false),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, summary: &ScanSummary, journal: &mut Journal) -> AppResult<()> {
        warning(format!(
            "Duplicates were found in {} file(s) while processing. Details in {}",
            summary.files_with_duplicates(),
            journal.path().display()
        ));

        if !self.should_open()? {
            return Ok(());
        }

        match open_with_default_viewer(journal.path()) {
            Ok(()) => info(format!("Opened {}", journal.path().display())),
            Err(e) => {
                journal.error(format!("Error while opening the log file: {e}"));
                error("Could not open the log file.");
            }
        }

        Ok(())
    }
}

/// Command that opens `path` with the platform's default application.
pub fn viewer_command(path: &Path) -> Command {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path);
    cmd
}

pub fn open_with_default_viewer(path: &Path) -> AppResult<()> {
    let mut cmd = viewer_command(path);
    debug!("running {:?}", cmd);

    let status = cmd.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(AppError::Other(format!(
            "{:?} exited with {status}",
            cmd.get_program()
        )))
    }
}
