//! Shared handler utilities for text entry
//!
//! Both the inline column forms and the task editor read typed text the
//! same way; this module holds that common mapping.

use iocraft::prelude::{KeyCode, KeyModifiers};

/// What a key press means inside a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    /// Append a character
    Insert(char),
    /// Remove the last character
    Delete,
    /// Enter
    Submit,
    /// Esc
    Cancel,
    /// Tab
    FocusNext,
    /// Shift+Tab
    FocusPrev,
    /// Ctrl+Q
    Quit,
    /// Key has no meaning in a text field
    Ignore,
}

/// Map a key event to a text field action
///
/// - Printable chars (without Ctrl/Alt): insert
/// - Backspace: delete
/// - Enter / Esc: submit / cancel
/// - Tab / Shift+Tab: move focus
/// - Ctrl+Q: quit the application
pub fn handle_text_input(code: KeyCode, modifiers: KeyModifiers) -> TextInputAction {
    let ctrl_or_alt = modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match code {
        KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => TextInputAction::Quit,
        KeyCode::Char(c) if !ctrl_or_alt => TextInputAction::Insert(c),
        KeyCode::Backspace => TextInputAction::Delete,
        KeyCode::Enter => TextInputAction::Submit,
        KeyCode::Esc => TextInputAction::Cancel,
        KeyCode::BackTab => TextInputAction::FocusPrev,
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => TextInputAction::FocusPrev,
        KeyCode::Tab => TextInputAction::FocusNext,
        _ => TextInputAction::Ignore,
    }
}
