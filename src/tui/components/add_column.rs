//! "+ Add Column" control
//!
//! Compact label until opened with `c`, then a one-line text entry.

use iocraft::prelude::*;

use crate::tui::board::model::AddColumnViewModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct AddColumnProps {
    pub state: AddColumnViewModel,
}

#[component]
pub fn AddColumn(props: &AddColumnProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    if !props.state.is_open {
        return element! {
            View(width: 16, flex_shrink: 0.0, padding_left: 1, padding_top: 1) {
                Text(content: "+ Add Column", color: theme.text_dimmed)
            }
        };
    }

    element! {
        View(
            width: 24,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: "New column", color: theme.text_dimmed)
            Text(
                content: format!("{}▏", props.state.input),
                color: theme.highlight,
                weight: Weight::Bold,
            )
        }
    }
}
