//! Keyboard event handlers for the kanban board
//!
//! Keys are first mapped to a [`BoardAction`] by pure functions, one per
//! input context, so the whole key map is unit-testable without a
//! terminal. The component then feeds the action to the model.

mod browsing;
mod forms;

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::{BoardApp, BoardAction, UiMode};
use crate::tui::edit_state::EditField;

/// Which key map applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Browsing,
    Dragging,
    /// Single-line text entry (add column, rename column)
    TextEntry,
    /// Task edit form with the focused field
    TaskForm(EditField),
}

impl KeyContext {
    pub fn for_app(app: &BoardApp) -> Self {
        match app.mode() {
            UiMode::Browsing => KeyContext::Browsing,
            UiMode::Dragging => KeyContext::Dragging,
            UiMode::AddingColumn { .. } | UiMode::RenamingColumn { .. } => KeyContext::TextEntry,
            UiMode::EditingTask(draft) => KeyContext::TaskForm(draft.focused),
        }
    }
}

/// Convert a key event to a BoardAction (pure function)
///
/// Returns `None` if the key doesn't map to any action in `context`.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    context: KeyContext,
) -> Option<BoardAction> {
    match context {
        KeyContext::Browsing => browsing::browse_key(code, modifiers),
        KeyContext::Dragging => browsing::drag_key(code, modifiers),
        KeyContext::TextEntry => forms::text_entry_key(code, modifiers),
        KeyContext::TaskForm(field) => forms::task_form_key(code, modifiers, field),
    }
}
