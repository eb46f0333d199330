use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable overriding every other location
pub const ROOT_ENV: &str = "TACKBOARD_ROOT";

/// Returns the root tackboard directory (config file and log live here).
///
/// Resolution order:
/// 1. `TACKBOARD_ROOT` environment variable (if set and non-empty)
/// 2. Platform data directory
/// 3. `.tackboard` in the current directory
pub fn root_dir() -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_ENV)
        && !root.is_empty()
    {
        return PathBuf::from(root);
    }
    ProjectDirs::from("", "", "tackboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".tackboard"))
}

/// Whether the root was pinned through the environment
pub fn root_overridden() -> bool {
    std::env::var(ROOT_ENV).is_ok_and(|v| !v.is_empty())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    root_dir().join("config.yaml")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    root_dir().join("tackboard.log")
}

/// Directory holding the key-value files.
///
/// The environment override wins over a configured `storage_dir`.
pub fn storage_dir(configured: Option<&std::path::Path>) -> PathBuf {
    match configured {
        Some(dir) if !root_overridden() => dir.to_path_buf(),
        _ => root_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::Path;

    #[test]
    #[serial]
    fn test_root_dir_with_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(ROOT_ENV, "/custom/board") };
        assert_eq!(root_dir(), PathBuf::from("/custom/board"));
        assert_eq!(config_path(), PathBuf::from("/custom/board/config.yaml"));
        assert_eq!(log_path(), PathBuf::from("/custom/board/tackboard.log"));
        unsafe { std::env::remove_var(ROOT_ENV) };
    }

    #[test]
    #[serial]
    fn test_root_dir_default_is_not_empty() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::remove_var(ROOT_ENV) };
        assert!(!root_dir().as_os_str().is_empty());
        assert!(!root_overridden());
    }

    #[test]
    #[serial]
    fn test_storage_dir_prefers_env_over_config() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(ROOT_ENV, "/from/env") };
        assert_eq!(
            storage_dir(Some(Path::new("/from/config"))),
            PathBuf::from("/from/env")
        );
        unsafe { std::env::remove_var(ROOT_ENV) };
    }

    #[test]
    #[serial]
    fn test_storage_dir_uses_config_without_env() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::remove_var(ROOT_ENV) };
        assert_eq!(
            storage_dir(Some(Path::new("/from/config"))),
            PathBuf::from("/from/config")
        );
        assert_eq!(storage_dir(None), root_dir());
    }
}
