use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::KeyValueStore;
use crate::error::Result;

/// In-process key-value store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let a = MemoryKeyValueStore::new();
        let b = a.clone();
        a.set("theme", "\"light\"").unwrap();
        assert_eq!(b.get("theme").unwrap().as_deref(), Some("\"light\""));
        b.remove("theme").unwrap();
        assert!(a.is_empty());
    }
}
