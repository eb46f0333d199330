pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod fs;
pub mod logging;
pub mod macros;
pub mod paths;
pub mod storage;
pub mod tui;
pub mod types;
pub mod utils;

pub use board::{BoardController, DragContext, DragEvent};
pub use config::Config;
pub use error::{BoardError, Result};
pub use storage::{
    BOARD_KEY, BoardStore, FileKeyValueStore, KeyValueStore, LocalBoardStore, MemoryKeyValueStore,
    THEME_KEY,
};
pub use types::{
    BoardState, Column, ColumnId, ColumnPatch, DEFAULT_COLUMNS, DEFAULT_TASK_TITLE, Task, TaskId,
    TaskPatch, TaskStatus,
};
