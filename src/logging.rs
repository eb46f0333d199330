//! File logging setup
//!
//! The board owns the terminal, so log lines go to `tackboard.log` under the
//! root directory rather than stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::fs::ensure_parent_dir;
use crate::paths;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "TACKBOARD_LOG";

/// Filter from `TACKBOARD_LOG`, falling back to the configured level
pub fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("tackboard={}", config.log_level)))
}

/// Install the global subscriber writing to the default log file
pub fn init(config: &Config) -> Result<()> {
    init_at(&paths::log_path(), config)
}

/// Install the global subscriber writing to `path`.
///
/// A second call is a no-op; the first subscriber stays installed.
pub fn init_at(path: &Path, config: &Config) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BoardError::Storage {
            operation: "open",
            path: path.to_path_buf(),
            source: e,
        })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Arc::new(file))
        .try_init();
    Ok(())
}
