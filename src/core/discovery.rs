use crate::errors::{AppError, AppResult};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolve the files to scan.
///
/// A file target is scanned on its own. A directory target yields its
/// `*.csv` entries (not recursive) sorted by path, so runs are repeatable.
pub fn discover_csv_files(target: &Path) -> AppResult<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }

    if !target.is_dir() {
        return Err(AppError::DataDirNotFound(target.to_path_buf()));
    }

    let escaped = Pattern::escape(&target.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.csv");
    debug!("searching CSV files with pattern {}", pattern.display());

    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(path),
            Ok(_) => None,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .collect();

    files.sort();
    debug!("{} CSV file(s) in {}", files.len(), target.display());

    Ok(files)
}
