//! Board column component
//!
//! Draws one column: header with title and count badge (or the inline
//! rename input), the visible cards, scroll indicators and the drop preview
//! while a task is dragged over it.

use iocraft::prelude::*;

use super::task_card::TaskCard;
use crate::tui::board::model::ColumnViewModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct BoardColumnProps {
    pub column: Option<ColumnViewModel>,
    /// Width of one column in characters
    pub width: u32,
}

#[component]
pub fn BoardColumn(props: &BoardColumnProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(column) = props.column.clone() else {
        return element!(View).into_any();
    };
    let card_width = props.width.saturating_sub(2);
    let show_empty = column.cards.is_empty() && column.drop_preview.is_none();

    let header_color = if column.is_drop_target {
        theme.drop_target
    } else if column.is_active {
        theme.border_focused
    } else {
        theme.border
    };

    let header = match column.rename_input.clone() {
        Some(input) => element! {
            View(flex_direction: FlexDirection::Row) {
                Text(content: format!("{input}▏"), color: theme.highlight, weight: Weight::Bold)
            }
        },
        None => element! {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: column.title.clone(),
                    color: if column.is_active { theme.text } else { theme.text_dimmed },
                    weight: if column.is_active { Weight::Bold } else { Weight::Normal },
                )
                Text(content: format!("({})", column.task_count), color: theme.text_dimmed)
            }
        },
    };

    element! {
        View(
            flex_grow: 1.0,
            flex_shrink: 0.0,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_edges: Edges::Right,
            border_style: BorderStyle::Single,
            border_color: theme.border,
            overflow: Overflow::Hidden,
        ) {
            View(
                width: 100pct,
                height: 2,
                flex_shrink: 0.0,
                justify_content: JustifyContent::Center,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: header_color,
            ) {
                #(Some(header))
            }

            View(
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                padding_left: 1,
                padding_right: 1,
                overflow: Overflow::Hidden,
            ) {
                #((column.hidden_above > 0).then(|| element! {
                    View(height: 1) {
                        Text(
                            content: format!("  {} more above", column.hidden_above),
                            color: theme.text_dimmed,
                        )
                    }
                }))

                #(column.cards.iter().map(|card| element! {
                    TaskCard(
                        task: card.task.clone(),
                        is_selected: card.is_selected,
                        is_dragged: card.is_dragged,
                        width: card_width,
                    )
                }))

                #(column.drop_preview.clone().map(|task| element! {
                    TaskCard(task, is_preview: true, width: card_width)
                }))

                #(show_empty.then(|| element! {
                    View(height: 1, margin_top: 1, padding_left: 1) {
                        Text(content: "(empty)", color: theme.text_dimmed)
                    }
                }))

                View(flex_grow: 1.0)

                #((column.hidden_below > 0).then(|| element! {
                    View(height: 1) {
                        Text(
                            content: format!("  {} more below", column.hidden_below),
                            color: theme.text_dimmed,
                        )
                    }
                }))
            }
        }
    }
    .into_any()
}
