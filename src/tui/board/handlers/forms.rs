//! Key maps for the inline column forms and the task editor

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::tui::board::model::BoardAction;
use crate::tui::edit_state::EditField;
use crate::tui::handlers::{TextInputAction, handle_text_input};

fn from_text_action(action: TextInputAction) -> Option<BoardAction> {
    match action {
        TextInputAction::Insert(c) => Some(BoardAction::Input(c)),
        TextInputAction::Delete => Some(BoardAction::Backspace),
        TextInputAction::Submit => Some(BoardAction::Submit),
        TextInputAction::Cancel => Some(BoardAction::Cancel),
        TextInputAction::FocusNext => Some(BoardAction::NextField),
        TextInputAction::FocusPrev => Some(BoardAction::PrevField),
        TextInputAction::Quit => Some(BoardAction::Quit),
        TextInputAction::Ignore => None,
    }
}

pub(super) fn text_entry_key(code: KeyCode, modifiers: KeyModifiers) -> Option<BoardAction> {
    from_text_action(handle_text_input(code, modifiers))
}

pub(super) fn task_form_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    field: EditField,
) -> Option<BoardAction> {
    if code == KeyCode::Char('s') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(BoardAction::Submit);
    }

    if field == EditField::Status {
        match code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                return Some(BoardAction::CycleNext);
            }
            KeyCode::Left | KeyCode::Char('h') => return Some(BoardAction::CyclePrev),
            _ => {}
        }
    }

    match handle_text_input(code, modifiers) {
        TextInputAction::Insert(_) if !field.is_text() => None,
        TextInputAction::Submit if field == EditField::Description => {
            Some(BoardAction::Input('\n'))
        }
        other => from_text_action(other),
    }
}
