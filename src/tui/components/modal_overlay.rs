//! Modal overlay component
//!
//! Full-screen absolutely positioned layer that centers its children.
//! The task editor is drawn inside one.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Paint the board's background behind the modal
    pub show_backdrop: bool,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let backdrop = props.show_backdrop.then(|| theme().background);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: backdrop,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}
