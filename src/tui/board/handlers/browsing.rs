//! Key maps for browsing the board and for an active keyboard drag

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::tui::board::model::BoardAction;

fn is_ctrl_q(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL)
}

pub(super) fn browse_key(code: KeyCode, modifiers: KeyModifiers) -> Option<BoardAction> {
    if is_ctrl_q(code, modifiers) {
        return Some(BoardAction::Quit);
    }
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match code {
        // Navigation
        KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::MoveRight),
        KeyCode::Char('j') | KeyCode::Down => Some(BoardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BoardAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(BoardAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(BoardAction::GoToBottom),

        // Columns
        KeyCode::Char('c') => Some(BoardAction::OpenAddColumn),
        KeyCode::Char('r') => Some(BoardAction::RenameColumn),
        KeyCode::Char('D') => Some(BoardAction::DeleteColumn),

        // Tasks
        KeyCode::Char('a') => Some(BoardAction::AddTask),
        KeyCode::Char('e') | KeyCode::Enter => Some(BoardAction::EditTask),
        KeyCode::Char('x') | KeyCode::Delete => Some(BoardAction::DeleteTask),
        KeyCode::Char('m') | KeyCode::Char(' ') => Some(BoardAction::GrabTask),

        // App
        KeyCode::Char('t') => Some(BoardAction::ToggleTheme),
        KeyCode::Char('q') => Some(BoardAction::Quit),

        _ => None,
    }
}

pub(super) fn drag_key(code: KeyCode, modifiers: KeyModifiers) -> Option<BoardAction> {
    if is_ctrl_q(code, modifiers) {
        return Some(BoardAction::Quit);
    }

    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(BoardAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(BoardAction::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => Some(BoardAction::DropTask),
        KeyCode::Esc => Some(BoardAction::Cancel),
        _ => None,
    }
}
