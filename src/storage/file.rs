use std::path::PathBuf;

use super::KeyValueStore;
use crate::error::{BoardError, Result};
use crate::fs::{delete_file_if_exists, read_file_if_exists, write_file_atomic};

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Keys become file names, so they must be a single plain path component
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(BoardError::Other(format!("invalid storage key '{key}'")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_file_if_exists(&self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        write_file_atomic(&self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        delete_file_if_exists(&self.path_for(key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let kv = FileKeyValueStore::new(dir.path());

        assert!(kv.get("kanbanColumns").unwrap().is_none());
        kv.set("kanbanColumns", "{}").unwrap();
        assert_eq!(kv.get("kanbanColumns").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("kanbanColumns.json").exists());

        kv.remove("kanbanColumns").unwrap();
        assert!(kv.get("kanbanColumns").unwrap().is_none());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let kv = FileKeyValueStore::new(dir.path().join("data"));
        kv.set("theme", "\"dark\"").unwrap();
        assert!(dir.path().join("data").join("theme.json").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let kv = FileKeyValueStore::new(dir.path());
        assert!(kv.set("../escape", "x").is_err());
        assert!(kv.set("a/b", "x").is_err());
        assert!(kv.get("").is_err());
        assert!(kv.get(".hidden").is_err());
    }
}
