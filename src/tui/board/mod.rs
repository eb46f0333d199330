//! Kanban board view (`tackboard board`)
//!
//! Interactive TUI over the persisted board: columns laid out left to right,
//! keyboard navigation, inline column forms, a task edit form and keyboard
//! drag-and-drop between columns.

pub mod handlers;
pub mod model;

use iocraft::prelude::*;

use crate::tui::components::{AddColumn, BoardColumn, Footer, Header, TaskEditor};
use crate::tui::theme::theme;
use crate::utils::truncate_string;

use handlers::{KeyContext, key_to_action};
use model::{ActionOutcome, BoardApp};

/// Rows taken by one rendered card (border, title, status and spacing)
const CARD_HEIGHT: usize = 6;

/// Rows outside the card area: header, column header, footer, indicators
const CHROME_HEIGHT: usize = 6;

/// Width reserved for the "+ Add Column" control
const ADD_COLUMN_WIDTH: u16 = 24;

/// Number of cards that fit in one column for a terminal height
pub fn cards_per_column(height: u16) -> usize {
    ((height as usize).saturating_sub(CHROME_HEIGHT) / CARD_HEIGHT).max(1)
}

/// Width in characters of one column for a terminal width
pub fn column_width(width: u16, columns: usize) -> u32 {
    let available = width.saturating_sub(ADD_COLUMN_WIDTH) as u32;
    available / columns.max(1) as u32
}

#[derive(Default, Props)]
pub struct KanbanBoardProps {
    /// Board to show; an in-memory board is used when absent
    pub app: Option<BoardApp>,
}

/// Main kanban board component
///
/// Layout:
/// ```text
/// +--------------------------------------------------+
/// | Tackboard                      3 tasks  theme: dark |
/// +-----------+-------------+--------+---------------+
/// | To Do (2) | In Progress | Done   | + Add Column  |
/// +-----------+-------------+--------+               |
/// | Card1     | Card1       |        |               |
/// | Card2     |             |        |               |
/// +-----------+-------------+--------+---------------+
/// | Footer with shortcuts                            |
/// +--------------------------------------------------+
/// ```
#[component]
pub fn KanbanBoard<'a>(
    props: &mut KanbanBoardProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut app = hooks.use_state(|| props.app.take().unwrap_or_else(BoardApp::in_memory));
    let mut should_exit = hooks.use_state(|| false);

    hooks.use_terminal_events({
        move |event| {
            if let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
                && kind != KeyEventKind::Release
            {
                let context = KeyContext::for_app(&app.read());
                if let Some(action) = key_to_action(code, modifiers, context)
                    && app.write().apply(action) == ActionOutcome::Quit
                {
                    should_exit.set(true);
                }
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let theme = theme();
    let view = app.read().view_model(cards_per_column(height));
    let col_width = column_width(width, view.columns.len());
    let status = view
        .dragging
        .as_ref()
        .map(|task| format!("Moving: {}", truncate_string(&task.title, 30)));

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            Header(
                task_count: Some(view.total_tasks),
                theme_mode: view.theme_mode,
                status,
            )

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
                overflow: Overflow::Hidden,
                margin_top: 1,
            ) {
                #(view.columns.iter().map(|column| element! {
                    BoardColumn(column: column.clone(), width: col_width)
                }))
                AddColumn(state: view.add_column.clone())
            }

            Footer(shortcuts: view.shortcuts.clone())

            #(view.editor.clone().map(|draft| element! {
                TaskEditor(draft, width: width.saturating_sub(10))
            }))
        }
    }
}
