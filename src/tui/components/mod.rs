//! Shared TUI components
//!
//! Reusable pieces of the kanban board screen.

pub mod add_column;
pub mod column;
pub mod footer;
pub mod header;
pub mod modal_overlay;
pub mod shortcuts;
pub mod task_card;
pub mod task_editor;

pub use add_column::{AddColumn, AddColumnProps};
pub use column::{BoardColumn, BoardColumnProps};
pub use footer::{
    Footer, FooterProps, Shortcut, board_shortcuts, drag_shortcuts, edit_shortcuts,
    text_entry_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use shortcuts::ShortcutsBuilder;
pub use task_card::{TaskCard, TaskCardProps};
pub use task_editor::{TaskEditor, TaskEditorProps};
