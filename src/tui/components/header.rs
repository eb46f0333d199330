//! App header bar component
//!
//! Displays the application title, the task count and the active theme.

use iocraft::prelude::*;

use crate::tui::theme::{ThemeMode, theme};

#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "Tackboard")
    pub title: Option<&'a str>,

    /// Total number of tasks on the board
    pub task_count: Option<usize>,

    pub theme_mode: ThemeMode,

    /// Status text shown before the count (e.g. "Moving: Fix login")
    pub status: Option<String>,
}

/// Format the task count label
pub fn task_count_label(count: usize) -> String {
    match count {
        1 => "1 task".to_string(),
        n => format!("{n} tasks"),
    }
}

/// App header bar
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let title = props.title.unwrap_or("Tackboard");
    let mode_label = match props.theme_mode {
        ThemeMode::Dark => "dark",
        ThemeMode::Light => "light",
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.header_background,
        ) {
            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(props.status.clone().map(|status| element! {
                    Text(content: status, color: theme.drop_target, weight: Weight::Bold)
                }))
                #(props.task_count.map(|count| element! {
                    Text(content: task_count_label(count), color: theme.text_dimmed)
                }))
                Text(content: format!("theme: {mode_label}"), color: theme.text_dimmed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_count_label() {
        assert_eq!(task_count_label(0), "0 tasks");
        assert_eq!(task_count_label(1), "1 task");
        assert_eq!(task_count_label(12), "12 tasks");
    }
}
