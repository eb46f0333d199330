//! Persistence for the board and UI preferences
//!
//! Everything is stored through a small string key-value interface, the
//! terminal counterpart of browser local storage. The board itself is one
//! JSON blob under [`BOARD_KEY`].

mod file;
mod memory;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::types::BoardState;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

/// Key holding the serialized board
pub const BOARD_KEY: &str = "kanbanColumns";

/// Key holding the display mode preference
pub const THEME_KEY: &str = "theme";

/// String key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Load/save of the whole board
pub trait BoardStore: Send + Sync {
    /// Stored board, or `None` when nothing usable is stored
    fn load(&self) -> Option<BoardState>;

    /// Replace the stored board with `board`
    fn save(&self, board: &BoardState) -> Result<()>;
}

/// Board persistence on top of any [`KeyValueStore`]
pub struct LocalBoardStore<S: KeyValueStore> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> LocalBoardStore<S> {
    pub fn new(kv: S) -> Self {
        Self::with_key(kv, BOARD_KEY)
    }

    pub fn with_key(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw stored blob, exactly as written
    pub fn raw(&self) -> Result<Option<String>> {
        self.kv.get(&self.key)
    }
}

impl<S: KeyValueStore> BoardStore for LocalBoardStore<S> {
    fn load(&self) -> Option<BoardState> {
        let raw = match self.kv.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored board");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored board");
                return None;
            }
        };

        match serde_json::from_str::<BoardState>(&raw) {
            Ok(board) => {
                debug!(
                    key = %self.key,
                    columns = board.len(),
                    tasks = board.task_count(),
                    "loaded board"
                );
                Some(board)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored board is malformed, ignoring it");
                None
            }
        }
    }

    fn save(&self, board: &BoardState) -> Result<()> {
        let json = serde_json::to_string(board)?;
        self.kv.set(&self.key, &json)
    }
}
