use crate::core::detector::DEFAULT_WINDOW_MINUTES;
use crate::core::parser::RequiredColumns;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What to do with the log file once duplicates have been found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenLogPolicy {
    #[default]
    Ask,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_identifier_column")]
    pub identifier_column: String,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_time_column")]
    pub time_column: String,
    #[serde(default = "default_window")]
    pub duplicate_window_minutes: i64,
    #[serde(default)]
    pub open_log: OpenLogPolicy,
}

fn default_data_dir() -> String {
    "Data".to_string()
}
fn default_log_file() -> String {
    "duplicates_log.txt".to_string()
}
fn default_identifier_column() -> String {
    "text".to_string()
}
fn default_date_column() -> String {
    "date_utc".to_string()
}
fn default_time_column() -> String {
    "time_utc".to_string()
}
fn default_window() -> i64 {
    DEFAULT_WINDOW_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_file: default_log_file(),
            identifier_column: default_identifier_column(),
            date_column: default_date_column(),
            time_column: default_time_column(),
            duplicate_window_minutes: default_window(),
            open_log: OpenLogPolicy::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rdupcheck")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rdupcheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdupcheck.conf")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // an empty file deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration file unless one already exists.
    /// Returns the config file path.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;
        if !path.exists() {
            let yaml = Self::default().to_yaml()?;
            let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(path)
    }

    pub fn required_columns(&self) -> RequiredColumns {
        RequiredColumns::new(
            self.identifier_column.trim(),
            self.date_column.trim(),
            self.time_column.trim(),
        )
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }
}
