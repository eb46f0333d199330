//! Terminal user interface
//!
//! - `board` - the kanban board screen and its testable model
//! - `components` - reusable iocraft components
//! - `theme` - light and dark palettes with the process-wide mode

pub mod board;
pub mod components;
pub mod edit_state;
pub mod handlers;
pub mod theme;

pub use board::model::{ActionOutcome, BoardAction, BoardApp, BoardViewModel, UiMode};
pub use board::{KanbanBoard, KanbanBoardProps};
pub use theme::{Theme, ThemeMode};
