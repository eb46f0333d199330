//! CLI command implementations
//!
//! Each `cmd_*` function opens the board in the configured data directory,
//! applies one operation through the [`BoardController`] and prints the
//! result. Unknown column or task ids are reported as errors here, even
//! though the controller itself treats them as no-ops.

mod board;
mod column;
mod config;
mod export;
mod ls;
mod task;

pub use board::cmd_board;
pub use column::{cmd_column_add, cmd_column_rename, cmd_column_rm};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use export::{cmd_export, cmd_reset};
pub use ls::cmd_ls;
pub use task::{TaskFields, cmd_task_add, cmd_task_edit, cmd_task_move, cmd_task_rm};

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::board::BoardController;
use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::storage::{FileKeyValueStore, KeyValueStore, LocalBoardStore};
use crate::types::Column;
use crate::utils::UuidGenerator;

/// The board store opened for one command
pub struct Workspace {
    pub config: Config,
    pub kv: Arc<FileKeyValueStore>,
}

impl Workspace {
    /// Open the store named by the current configuration
    pub fn open() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        let dir = config.storage_dir();
        debug!(dir = %dir.display(), "opening board store");
        Self {
            config,
            kv: Arc::new(FileKeyValueStore::new(dir)),
        }
    }

    pub fn board_store(&self) -> LocalBoardStore<Arc<FileKeyValueStore>> {
        LocalBoardStore::new(self.kv.clone())
    }

    /// Controller over the stored board (default board when none is stored)
    pub fn controller(&self) -> BoardController {
        BoardController::load(Box::new(self.board_store()), Box::new(UuidGenerator))
    }

    pub fn prefs(&self) -> Arc<dyn KeyValueStore> {
        self.kv.clone()
    }
}

/// Look up a column, turning a stale id into an error
pub(crate) fn require_column<'a>(controller: &'a BoardController, id: &str) -> Result<&'a Column> {
    controller
        .state()
        .column(id)
        .ok_or_else(|| BoardError::ColumnNotFound(id.to_string()))
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
