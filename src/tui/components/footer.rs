//! Keyboard shortcuts bar component
//!
//! Displays the keys available in the current board mode at the bottom
//! of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "a", "C-s", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Add Task", "Save")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.surface,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts while browsing the board
pub fn board_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .add("a", "Add Task")
        .add("e", "Edit")
        .add("x", "Delete")
        .add("m", "Move")
        .with_columns()
        .add("t", "Theme")
        .with_quit()
        .build()
}

/// Shortcuts while a task is picked up
pub fn drag_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("h/l", "Choose Column")
        .add("Enter", "Drop")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts for the task edit form
pub fn edit_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Tab", "Next Field")
        .add("S-Tab", "Prev Field")
        .add("←/→", "Status")
        .add("C-s", "Save")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts for the add column and rename column inputs
pub fn text_entry_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Save")
        .add("Esc", "Cancel")
        .add("C-q", "Quit")
        .build()
}
