//! Task card component for kanban board columns
//!
//! A compact card showing the task title (wrapped), an optional description
//! line, the due date and a status badge.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{Task, format_due_date};
use crate::utils::{truncate_string, wrap_text_lines};

#[derive(Default, Props)]
pub struct TaskCardProps {
    pub task: Task,
    pub is_selected: bool,
    /// Card is the source of the active drag
    pub is_dragged: bool,
    /// Card is the drop preview drawn in the hovered column
    pub is_preview: bool,
    /// Available width for the card content (in characters)
    pub width: Option<u32>,
}

/// Layout:
/// ```text
/// ╭───────────────────╮
/// │> Fix the login    │
/// │  bug              │
/// │  users cannot ... │
/// │  Jun 1, 2024      │
/// │  [in progress]    │
/// ╰───────────────────╯
/// ```
#[component]
pub fn TaskCard(props: &TaskCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let task = &props.task;

    let border_color = if props.is_preview {
        theme.drop_target
    } else if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let bg_color = props.is_selected.then_some(theme.highlight);
    let text_color = if props.is_selected {
        theme.highlight_text
    } else if props.is_dragged {
        theme.text_dimmed
    } else {
        theme.text
    };

    // Round border and padding take 4 columns
    let card_width = props.width.unwrap_or(24);
    let text_width = (card_width.saturating_sub(4) as usize).max(8);

    let title_lines = wrap_text_lines(&task.title, text_width, 3);
    let description = task
        .description
        .lines()
        .find(|l| !l.trim().is_empty())
        .map(|l| truncate_string(l.trim(), text_width));
    let due = task.due_date.map(format_due_date);

    let indicator = if props.is_selected { ">" } else { " " };
    let status_color = theme.status_color(task.status);

    element! {
        View(
            width: 100pct,
            min_height: 3,
            flex_direction: FlexDirection::Column,
            border_style: if props.is_preview { BorderStyle::Double } else { BorderStyle::Round },
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            #(title_lines.into_iter().enumerate().map(|(i, line)| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: if i == 0 { indicator } else { " " },
                            color: text_color,
                            weight: Weight::Bold,
                        )
                        Text(content: line, color: text_color, weight: Weight::Bold)
                    }
                }
            }))
            #(description.map(|d| element! {
                Text(content: format!(" {d}"), color: theme.text_dimmed)
            }))
            #(due.map(|d| element! {
                Text(content: format!(" {d}"), color: theme.due_date)
            }))
            View(padding_left: 1) {
                Text(
                    content: format!("[{}]", task.status.label()),
                    color: status_color,
                    weight: Weight::Bold,
                )
            }
        }
    }
}
