//! Task edit form overlay
//!
//! Renders a [`TaskDraft`] as a centered form. All editing happens in the
//! board model; this component only draws the draft it is given.

use iocraft::prelude::*;

use super::modal_overlay::ModalOverlay;
use crate::tui::edit_state::{EditField, TaskDraft};
use crate::tui::theme::theme;
use crate::types::TaskStatus;

const CURSOR: &str = "▏";

#[derive(Default, Props)]
pub struct TaskEditorProps {
    pub draft: Option<TaskDraft>,
    pub width: u16,
}

/// Text shown for one field, with a cursor when focused
fn field_text(value: &str, focused: bool, placeholder: &str) -> String {
    match (value.is_empty(), focused) {
        (true, true) => CURSOR.to_string(),
        (true, false) => placeholder.to_string(),
        (false, true) => format!("{value}{CURSOR}"),
        (false, false) => value.to_string(),
    }
}

/// Status selector line, e.g. `< in progress >`
pub fn status_selector(status: TaskStatus, focused: bool) -> String {
    if focused {
        format!("< {} >", status.label())
    } else {
        status.label().to_string()
    }
}

#[component]
pub fn TaskEditor(props: &TaskEditorProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(draft) = props.draft.as_ref() else {
        return element!(View).into_any();
    };
    let width = props.width.clamp(30, 70);

    let rows: Vec<(EditField, String)> = EditField::ALL
        .iter()
        .map(|&field| {
            let focused = draft.focused == field;
            let text = match field {
                EditField::Title => field_text(&draft.title, focused, ""),
                EditField::Description => field_text(&draft.description, focused, "(none)"),
                EditField::DueDate => field_text(&draft.due_date, focused, "YYYY-MM-DD"),
                EditField::Status => status_selector(draft.status, focused),
            };
            (field, text)
        })
        .collect();

    element! {
        ModalOverlay(show_backdrop: false) {
            View(
                width,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                background_color: theme.surface,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: "Edit Task", color: theme.text, weight: Weight::Bold)
                #(rows.into_iter().map(|(field, text)| {
                    let focused = draft.focused == field;
                    let value_color = match field {
                        EditField::Status => theme.status_color(draft.status),
                        _ if focused => theme.text,
                        _ => theme.text_dimmed,
                    };
                    element! {
                        View(flex_direction: FlexDirection::Column, margin_top: 1) {
                            Text(
                                content: field.label(),
                                color: if focused { theme.border_focused } else { theme.text_dimmed },
                                weight: if focused { Weight::Bold } else { Weight::Normal },
                            )
                            Text(content: text, color: value_color)
                        }
                    }
                }))
                #(draft.error.clone().map(|error| element! {
                    View(margin_top: 1) {
                        Text(content: error, color: theme.error, weight: Weight::Bold)
                    }
                }))
            }
        }
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_text() {
        assert_eq!(field_text("", false, "(none)"), "(none)");
        assert_eq!(field_text("", true, "(none)"), CURSOR);
        assert_eq!(field_text("abc", true, ""), format!("abc{CURSOR}"));
        assert_eq!(field_text("abc", false, ""), "abc");
    }

    #[test]
    fn test_status_selector() {
        assert_eq!(status_selector(TaskStatus::InProgress, true), "< in progress >");
        assert_eq!(status_selector(TaskStatus::Completed, false), "completed");
    }
}
