//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the root directory and
//! includes:
//! - Where the board and preference files are kept
//! - The default display mode
//! - The log level

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::fs::{read_file_if_exists, write_file_atomic};
use crate::paths;
use crate::tui::theme::ThemeMode;

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: [&str; 3] = ["storage_dir", "theme", "log_level"];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory for the key-value files (default: the root directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// Display mode used until one is toggled in the board
    #[serde(default)]
    pub theme: ThemeMode,

    /// Log level written to the log file (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: None,
            theme: ThemeMode::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match read_file_if_exists(path)? {
            Some(content) if !content.trim().is_empty() => {
                let config: Config = serde_yaml_ng::from_str(&content)?;
                validate_log_level(&config.log_level)?;
                Ok(config)
            }
            _ => Ok(Config::default()),
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_yaml_ng::to_string(self)?;
        write_file_atomic(path, &content)
    }

    /// Directory holding the board and preference files
    pub fn storage_dir(&self) -> PathBuf {
        paths::storage_dir(self.storage_dir.as_deref())
    }

    /// Read one key as a display string
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage_dir" => Ok(self
                .storage_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "theme" => Ok(self.theme.to_string()),
            "log_level" => Ok(self.log_level.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Validate and set one key. An empty `storage_dir` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage_dir" => {
                let value = value.trim();
                self.storage_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "theme" => self.theme = value.trim().parse()?,
            "log_level" => {
                let level = value.trim().to_lowercase();
                validate_log_level(&level)?;
                self.log_level = level;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn validate_log_level(level: &str) -> Result<()> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(BoardError::InvalidLogLevel(level.to_string()))
    }
}

fn unknown_key(key: &str) -> BoardError {
    BoardError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
