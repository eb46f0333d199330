//! Board UI model for testable state management
//!
//! [`BoardApp`] couples the board controller with the UI-only state
//! (selection, mode, keyboard drag) and exposes a reducer
//! ([`BoardApp::apply`]) plus a derived view model, so everything the
//! terminal board does can be exercised without iocraft.

use std::sync::Arc;

use tracing::debug;

use crate::board::{BoardController, DragContext};
use crate::storage::{KeyValueStore, LocalBoardStore, MemoryKeyValueStore};
use crate::tui::components::footer::{
    Shortcut, board_shortcuts, drag_shortcuts, edit_shortcuts, text_entry_shortcuts,
};
use crate::tui::edit_state::{EditField, TaskDraft};
use crate::tui::theme::{self, ThemeMode};
use crate::types::{ColumnId, ColumnPatch, Task};
use crate::utils::UuidGenerator;

/// What the keyboard is currently driving
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Browsing,
    /// Add-column form is open
    AddingColumn { input: String },
    /// Inline title edit of one column
    RenamingColumn { column_id: ColumnId, input: String },
    /// Task edit form is open
    EditingTask(Box<TaskDraft>),
    /// A task is picked up and follows the hovered column
    Dragging,
}

/// All possible actions on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    // Navigation (hover while dragging)
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,

    // Columns
    OpenAddColumn,
    RenameColumn,
    DeleteColumn,

    // Tasks
    AddTask,
    EditTask,
    DeleteTask,

    // Drag
    GrabTask,
    DropTask,

    // Forms
    Input(char),
    Backspace,
    NextField,
    PrevField,
    CycleNext,
    CyclePrev,
    Submit,
    Cancel,

    // App
    ToggleTheme,
    Quit,
}

/// Result of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    Quit,
}

/// Computed view model for rendering
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    pub columns: Vec<ColumnViewModel>,
    pub add_column: AddColumnViewModel,
    /// Open task edit form
    pub editor: Option<TaskDraft>,
    /// Snapshot of the task being dragged
    pub dragging: Option<Task>,
    pub shortcuts: Vec<Shortcut>,
    pub total_tasks: usize,
    pub theme_mode: ThemeMode,
}

/// View model for a single column
#[derive(Debug, Clone)]
pub struct ColumnViewModel {
    pub id: ColumnId,
    pub title: String,
    /// Uncommitted title while renaming
    pub rename_input: Option<String>,
    pub task_count: usize,
    pub is_active: bool,
    /// Hovered by an active drag (and not the drag's source)
    pub is_drop_target: bool,
    /// Overlay card drawn at the end of the hovered column
    pub drop_preview: Option<Task>,
    pub cards: Vec<CardViewModel>,
    pub hidden_above: usize,
    pub hidden_below: usize,
}

/// View model for a single task card
#[derive(Debug, Clone)]
pub struct CardViewModel {
    pub task: Task,
    pub is_selected: bool,
    /// The card is the source of the active drag
    pub is_dragged: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AddColumnViewModel {
    pub is_open: bool,
    pub input: String,
}

/// Calculate the scroll offset that keeps `selected_row` centered
pub fn adjust_column_scroll(selected_row: usize, column_height: usize, total_items: usize) -> usize {
    if column_height == 0 || total_items == 0 {
        return 0;
    }
    let ideal_offset = selected_row.saturating_sub(column_height / 2);
    let max_offset = total_items.saturating_sub(column_height);
    ideal_offset.min(max_offset)
}

pub struct BoardApp {
    controller: BoardController,
    prefs: Arc<dyn KeyValueStore>,
    drag: DragContext,
    mode: UiMode,
    current_column: usize,
    current_row: usize,
}

impl BoardApp {
    pub fn new(controller: BoardController, prefs: Arc<dyn KeyValueStore>) -> Self {
        let mut app = Self {
            controller,
            prefs,
            drag: DragContext::new(),
            mode: UiMode::Browsing,
            current_column: 0,
            current_row: 0,
        };
        app.sync_drop_targets();
        app
    }

    /// Board backed by process memory only
    pub fn in_memory() -> Self {
        let kv = MemoryKeyValueStore::new();
        let controller = BoardController::load(
            Box::new(LocalBoardStore::new(kv.clone())),
            Box::new(UuidGenerator),
        );
        Self::new(controller, Arc::new(kv))
    }

    pub fn controller(&self) -> &BoardController {
        &self.controller
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn current_column(&self) -> usize {
        self.current_column
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn drag(&self) -> &DragContext {
        &self.drag
    }

    fn column_count(&self) -> usize {
        self.controller.state().len()
    }

    fn row_count(&self, column: usize) -> usize {
        self.controller
            .state()
            .columns()
            .get(column)
            .map(|c| c.tasks.len())
            .unwrap_or(0)
    }

    fn selected_column_id(&self) -> Option<ColumnId> {
        self.controller
            .state()
            .columns()
            .get(self.current_column)
            .map(|c| c.id.clone())
    }

    /// Selected (column id, task)
    pub fn selected_task(&self) -> Option<(ColumnId, &Task)> {
        let column = self.controller.state().columns().get(self.current_column)?;
        let task = column.tasks.get(self.current_row)?;
        Some((column.id.clone(), task))
    }

    /// Keep the selection inside the board after any mutation
    fn clamp_selection(&mut self) {
        let columns = self.column_count();
        self.current_column = self.current_column.min(columns.saturating_sub(1));
        let rows = self.row_count(self.current_column);
        self.current_row = self.current_row.min(rows.saturating_sub(1));
    }

    fn select_task(&mut self, task_id: &str) {
        for (ci, column) in self.controller.state().columns().iter().enumerate() {
            if let Some(ri) = column.tasks.iter().position(|t| t.id == *task_id) {
                self.current_column = ci;
                self.current_row = ri;
                return;
            }
        }
    }

    fn sync_drop_targets(&mut self) {
        self.drag
            .register_targets(self.controller.state().column_ids());
    }

    /// Apply one action, mutating the board through the controller
    pub fn apply(&mut self, action: BoardAction) -> ActionOutcome {
        if action == BoardAction::Quit {
            return ActionOutcome::Quit;
        }
        if action == BoardAction::ToggleTheme {
            let mode = theme::toggle_mode();
            theme::save_mode(self.prefs.as_ref(), mode);
            return ActionOutcome::Continue;
        }

        match std::mem::take(&mut self.mode) {
            UiMode::Browsing => self.apply_browsing(action),
            UiMode::Dragging => {
                self.mode = UiMode::Dragging;
                self.apply_dragging(action);
            }
            UiMode::AddingColumn { input } => self.apply_adding_column(input, action),
            UiMode::RenamingColumn { column_id, input } => {
                self.apply_renaming(column_id, input, action)
            }
            UiMode::EditingTask(draft) => self.apply_editing(*draft, action),
        }

        self.sync_drop_targets();
        self.clamp_selection();
        ActionOutcome::Continue
    }

    fn apply_browsing(&mut self, action: BoardAction) {
        match action {
            BoardAction::MoveLeft => {
                self.current_column = self.current_column.saturating_sub(1);
            }
            BoardAction::MoveRight => {
                self.current_column += 1;
            }
            BoardAction::MoveUp => {
                self.current_row = self.current_row.saturating_sub(1);
            }
            BoardAction::MoveDown => {
                self.current_row += 1;
            }
            BoardAction::GoToTop => {
                self.current_row = 0;
            }
            BoardAction::GoToBottom => {
                self.current_row = self.row_count(self.current_column).saturating_sub(1);
            }
            BoardAction::OpenAddColumn => {
                self.controller.set_adding_column(true);
                self.mode = UiMode::AddingColumn {
                    input: String::new(),
                };
            }
            BoardAction::RenameColumn => {
                if let Some(column) = self.controller.state().columns().get(self.current_column) {
                    self.mode = UiMode::RenamingColumn {
                        column_id: column.id.clone(),
                        input: column.title.clone(),
                    };
                }
            }
            BoardAction::DeleteColumn => {
                if let Some(id) = self.selected_column_id() {
                    self.controller.delete_column(&id);
                }
            }
            BoardAction::AddTask => {
                if let Some(id) = self.selected_column_id()
                    && let Some(task_id) = self.controller.add_task(&id)
                {
                    self.select_task(&task_id);
                }
            }
            BoardAction::EditTask => {
                if let Some((column_id, task)) = self.selected_task() {
                    let draft = TaskDraft::from_task(column_id, task);
                    self.mode = UiMode::EditingTask(Box::new(draft));
                }
            }
            BoardAction::DeleteTask => {
                if let Some((column_id, task)) = self.selected_task() {
                    let task_id = task.id.clone();
                    self.controller.delete_task(&column_id, &task_id);
                }
            }
            BoardAction::GrabTask => {
                if let Some((column_id, task)) = self.selected_task() {
                    let task_id = task.id.clone();
                    self.sync_drop_targets();
                    if let Some(event) = self.drag.begin(task_id, column_id) {
                        self.controller.handle_drag_event(event);
                        self.mode = UiMode::Dragging;
                    }
                }
            }
            _ => {}
        }
    }

    fn hovered_index(&self) -> Option<usize> {
        let hovered = self.drag.hovered()?;
        self.controller.state().column_index(hovered)
    }

    fn apply_dragging(&mut self, action: BoardAction) {
        match action {
            BoardAction::MoveLeft => self.drag.hover_prev(),
            BoardAction::MoveRight => self.drag.hover_next(),
            BoardAction::DropTask | BoardAction::Submit => {
                let task_id = self.drag.dragged_item().cloned();
                if let Some(event) = self.drag.drop_item() {
                    let moved = self.controller.handle_drag_event(event);
                    debug!(moved, "dropped task");
                }
                self.mode = UiMode::Browsing;
                if let Some(task_id) = task_id {
                    self.select_task(&task_id);
                }
                return;
            }
            BoardAction::Cancel => {
                if let Some(event) = self.drag.cancel() {
                    self.controller.handle_drag_event(event);
                }
                self.mode = UiMode::Browsing;
                return;
            }
            _ => {}
        }
        if let Some(index) = self.hovered_index() {
            self.current_column = index;
        }
    }

    fn apply_adding_column(&mut self, mut input: String, action: BoardAction) {
        match action {
            BoardAction::Input(c) if c != '\n' => input.push(c),
            BoardAction::Backspace => {
                input.pop();
            }
            BoardAction::Submit => {
                if self.controller.add_column(&input).is_some() {
                    self.current_column = self.column_count().saturating_sub(1);
                    self.current_row = 0;
                    return;
                }
            }
            BoardAction::Cancel => {
                self.controller.set_adding_column(false);
                return;
            }
            _ => {}
        }
        self.mode = UiMode::AddingColumn { input };
    }

    fn apply_renaming(&mut self, column_id: ColumnId, mut input: String, action: BoardAction) {
        match action {
            BoardAction::Input(c) if c != '\n' => input.push(c),
            BoardAction::Backspace => {
                input.pop();
            }
            // Enter submits, Tab moves focus away; both commit a non-blank title
            BoardAction::Submit | BoardAction::NextField | BoardAction::PrevField => {
                let title = input.trim();
                if !title.is_empty() {
                    self.controller
                        .update_column(&column_id, ColumnPatch::title(title));
                    return;
                }
            }
            BoardAction::Cancel => return,
            _ => {}
        }
        if self.controller.state().column(&column_id).is_some() {
            self.mode = UiMode::RenamingColumn { column_id, input };
        }
    }

    fn apply_editing(&mut self, mut draft: TaskDraft, action: BoardAction) {
        match action {
            BoardAction::Input(c) => draft.input(c),
            BoardAction::Backspace => draft.backspace(),
            BoardAction::NextField => draft.next_field(),
            BoardAction::PrevField => draft.prev_field(),
            BoardAction::CycleNext => draft.cycle_status(true),
            BoardAction::CyclePrev => draft.cycle_status(false),
            BoardAction::Submit => match draft.to_patch() {
                Ok(patch) => {
                    self.controller
                        .update_task(&draft.column_id, &draft.task_id, patch);
                    return;
                }
                Err(e) => draft.error = Some(e.to_string()),
            },
            BoardAction::Cancel => return,
            _ => {}
        }
        self.mode = UiMode::EditingTask(Box::new(draft));
    }

    /// Field focused in the task form, if one is open
    pub fn editing_field(&self) -> Option<EditField> {
        match &self.mode {
            UiMode::EditingTask(draft) => Some(draft.focused),
            _ => None,
        }
    }

    /// Derive everything the board renders. `column_height` is the number
    /// of cards that fit in one column.
    pub fn view_model(&self, column_height: usize) -> BoardViewModel {
        let state = self.controller.state();
        let dragging = if matches!(self.mode, UiMode::Dragging) {
            self.controller.active_drag().cloned()
        } else {
            None
        };
        let drag_source = self.drag.source();
        let hovered = self.drag.hovered();

        let columns = state
            .columns()
            .iter()
            .enumerate()
            .map(|(ci, column)| {
                let is_active = ci == self.current_column;
                let total = column.tasks.len();
                let selected_row = if is_active { self.current_row } else { 0 };
                let offset = adjust_column_scroll(selected_row, column_height, total);
                let end = (offset + column_height).min(total);

                let is_drop_target = dragging.is_some()
                    && hovered == Some(&column.id)
                    && drag_source != Some(&column.id);

                let cards = column.tasks[offset.min(end)..end]
                    .iter()
                    .enumerate()
                    .map(|(i, task)| CardViewModel {
                        task: task.clone(),
                        is_selected: is_active
                            && offset + i == self.current_row
                            && !matches!(self.mode, UiMode::Dragging),
                        is_dragged: dragging.as_ref().is_some_and(|d| d.id == task.id),
                    })
                    .collect();

                let rename_input = match &self.mode {
                    UiMode::RenamingColumn { column_id, input } if *column_id == column.id => {
                        Some(input.clone())
                    }
                    _ => None,
                };

                ColumnViewModel {
                    id: column.id.clone(),
                    title: column.title.clone(),
                    rename_input,
                    task_count: total,
                    is_active,
                    is_drop_target,
                    drop_preview: if is_drop_target { dragging.clone() } else { None },
                    cards,
                    hidden_above: offset,
                    hidden_below: total - end,
                }
            })
            .collect();

        let add_column = match &self.mode {
            UiMode::AddingColumn { input } => AddColumnViewModel {
                is_open: true,
                input: input.clone(),
            },
            _ => AddColumnViewModel::default(),
        };

        let editor = match &self.mode {
            UiMode::EditingTask(draft) => Some((**draft).clone()),
            _ => None,
        };

        let shortcuts = match &self.mode {
            UiMode::Browsing => board_shortcuts(),
            UiMode::Dragging => drag_shortcuts(),
            UiMode::AddingColumn { .. } | UiMode::RenamingColumn { .. } => text_entry_shortcuts(),
            UiMode::EditingTask(_) => edit_shortcuts(),
        };

        BoardViewModel {
            columns,
            add_column,
            editor,
            dragging,
            shortcuts,
            total_tasks: state.task_count(),
            theme_mode: theme::mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskStatus;
    use serial_test::serial;

    fn app() -> BoardApp {
        BoardApp::in_memory()
    }

    fn type_text(app: &mut BoardApp, text: &str) {
        for c in text.chars() {
            app.apply(BoardAction::Input(c));
        }
    }

    fn titles(app: &BoardApp) -> Vec<String> {
        app.controller()
            .state()
            .columns()
            .iter()
            .map(|c| c.title.clone())
            .collect()
    }

    #[test]
    fn test_adjust_column_scroll() {
        assert_eq!(adjust_column_scroll(0, 5, 20), 0);
        assert_eq!(adjust_column_scroll(10, 5, 20), 8);
        assert_eq!(adjust_column_scroll(19, 5, 20), 15);
        assert_eq!(adjust_column_scroll(3, 5, 4), 0);
        assert_eq!(adjust_column_scroll(3, 0, 4), 0);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut app = app();
        app.apply(BoardAction::MoveLeft);
        assert_eq!(app.current_column(), 0);
        for _ in 0..5 {
            app.apply(BoardAction::MoveRight);
        }
        assert_eq!(app.current_column(), 2);
        app.apply(BoardAction::MoveDown);
        assert_eq!(app.current_row(), 0);
    }

    #[test]
    fn test_add_task_selects_it() {
        let mut app = app();
        app.apply(BoardAction::AddTask);
        app.apply(BoardAction::AddTask);
        assert_eq!(app.current_row(), 1);
        let (column, task) = app.selected_task().unwrap();
        assert_eq!(column, "todo");
        assert_eq!(task.title, "New Task");
    }

    #[test]
    fn test_add_column_flow() {
        let mut app = app();
        app.apply(BoardAction::OpenAddColumn);
        assert!(app.controller().is_adding_column());
        type_text(&mut app, "Review");
        app.apply(BoardAction::Backspace);
        app.apply(BoardAction::Submit);

        assert_eq!(titles(&app).last().map(String::as_str), Some("Revie"));
        assert_eq!(app.mode(), &UiMode::Browsing);
        assert!(!app.controller().is_adding_column());
        assert_eq!(app.current_column(), 3);
    }

    #[test]
    fn test_add_column_blank_keeps_form_open() {
        let mut app = app();
        app.apply(BoardAction::OpenAddColumn);
        type_text(&mut app, "   ");
        app.apply(BoardAction::Submit);
        assert!(matches!(app.mode(), UiMode::AddingColumn { .. }));
        assert_eq!(app.controller().state().len(), 3);
    }

    #[test]
    fn test_add_column_cancel() {
        let mut app = app();
        app.apply(BoardAction::OpenAddColumn);
        type_text(&mut app, "Nope");
        app.apply(BoardAction::Cancel);
        assert_eq!(app.mode(), &UiMode::Browsing);
        assert!(!app.controller().is_adding_column());
        assert_eq!(app.controller().state().len(), 3);
    }

    #[test]
    fn test_rename_commits_on_blur() {
        let mut app = app();
        app.apply(BoardAction::RenameColumn);
        for _ in 0.."To Do".len() {
            app.apply(BoardAction::Backspace);
        }
        type_text(&mut app, " Backlog ");
        app.apply(BoardAction::NextField);
        assert_eq!(titles(&app)[0], "Backlog");
        assert_eq!(app.mode(), &UiMode::Browsing);
    }

    #[test]
    fn test_rename_blank_is_not_committed() {
        let mut app = app();
        app.apply(BoardAction::RenameColumn);
        for _ in 0..10 {
            app.apply(BoardAction::Backspace);
        }
        app.apply(BoardAction::Submit);
        assert!(matches!(app.mode(), UiMode::RenamingColumn { .. }));
        app.apply(BoardAction::Cancel);
        assert_eq!(titles(&app)[0], "To Do");
    }

    #[test]
    fn test_delete_column_moves_selection() {
        let mut app = app();
        app.apply(BoardAction::MoveRight);
        app.apply(BoardAction::MoveRight);
        app.apply(BoardAction::DeleteColumn);
        assert_eq!(titles(&app), vec!["To Do", "In Progress"]);
        assert_eq!(app.current_column(), 1);
    }

    #[test]
    fn test_edit_task_commits_all_fields() {
        let mut app = app();
        app.apply(BoardAction::AddTask);
        app.apply(BoardAction::EditTask);
        for _ in 0.."New Task".len() {
            app.apply(BoardAction::Backspace);
        }
        type_text(&mut app, "Write tests");
        app.apply(BoardAction::NextField);
        type_text(&mut app, "cover the reducer");
        app.apply(BoardAction::NextField);
        type_text(&mut app, "2024-06-01");
        app.apply(BoardAction::NextField);
        app.apply(BoardAction::CycleNext);
        app.apply(BoardAction::Submit);

        assert_eq!(app.mode(), &UiMode::Browsing);
        let (_, task) = app.selected_task().unwrap();
        assert_eq!(task.title, "Write tests");
        assert_eq!(task.description, "cover the reducer");
        assert_eq!(task.due_date, Some(jiff::civil::date(2024, 6, 1)));
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_edit_invalid_date_keeps_form_open() {
        let mut app = app();
        app.apply(BoardAction::AddTask);
        app.apply(BoardAction::EditTask);
        app.apply(BoardAction::NextField);
        app.apply(BoardAction::NextField);
        type_text(&mut app, "someday");
        app.apply(BoardAction::Submit);

        match app.mode() {
            UiMode::EditingTask(draft) => assert!(draft.error.is_some()),
            other => panic!("expected edit form, got {other:?}"),
        }
        assert!(app.selected_task().unwrap().1.due_date.is_none());
    }

    #[test]
    fn test_edit_cancel_discards() {
        let mut app = app();
        app.apply(BoardAction::AddTask);
        app.apply(BoardAction::EditTask);
        type_text(&mut app, " changed");
        app.apply(BoardAction::Cancel);
        assert_eq!(app.selected_task().unwrap().1.title, "New Task");
    }

    #[test]
    fn test_editing_ignores_drag_keys() {
        let mut app = app();
        app.apply(BoardAction::AddTask);
        app.apply(BoardAction::EditTask);
        app.apply(BoardAction::GrabTask);
        assert!(!app.drag().is_dragging());
        assert!(app.editing_field().is_some());
    }

    #[test]
    fn test_delete_task() {
        let mut app = app();
        app.apply(BoardAction::AddTask);
        app.apply(BoardAction::AddTask);
        app.apply(BoardAction::DeleteTask);
        assert_eq!(app.controller().state().task_count(), 1);
        assert_eq!(app.current_row(), 0);
    }

    #[test]
    fn test_keyboard_drag_moves_task() {
        let mut app = app();
        app.apply(BoardAction::AddTask);
        let task_id = app.selected_task().unwrap().1.id.clone();

        app.apply(BoardAction::GrabTask);
        assert_eq!(app.mode(), &UiMode::Dragging);
        assert!(app.controller().active_drag().is_some());

        app.apply(BoardAction::MoveRight);
        app.apply(BoardAction::MoveRight);
        assert_eq!(app.current_column(), 2);
        app.apply(BoardAction::DropTask);

        assert_eq!(app.mode(), &UiMode::Browsing);
        assert_eq!(app.controller().column_of(&task_id).unwrap().id, "done");
        assert_eq!(app.selected_task().unwrap().1.id, task_id);
        assert!(app.controller().active_drag().is_none());
    }

    #[test]
    fn test_cancelled_drag_leaves_board() {
        let mut app = app();
        app.apply(BoardAction::AddTask);
        let before = app.controller().state().clone();
        app.apply(BoardAction::GrabTask);
        app.apply(BoardAction::MoveRight);
        app.apply(BoardAction::Cancel);
        assert_eq!(app.controller().state(), &before);
        assert!(app.controller().active_drag().is_none());
        assert_eq!(app.mode(), &UiMode::Browsing);
    }

    #[test]
    fn test_grab_on_empty_column_does_nothing() {
        let mut app = app();
        app.apply(BoardAction::GrabTask);
        assert_eq!(app.mode(), &UiMode::Browsing);
    }

    #[test]
    fn test_view_model_drag_preview() {
        let mut app = app();
        app.apply(BoardAction::AddTask);
        app.apply(BoardAction::GrabTask);
        app.apply(BoardAction::MoveRight);

        let vm = app.view_model(5);
        assert!(vm.dragging.is_some());
        assert!(vm.columns[0].cards[0].is_dragged);
        assert!(!vm.columns[0].is_drop_target);
        assert!(vm.columns[1].is_drop_target);
        assert!(vm.columns[1].drop_preview.is_some());
        assert!(vm.columns[2].drop_preview.is_none());
    }

    #[test]
    fn test_view_model_scrolls_active_column() {
        let mut app = app();
        for _ in 0..10 {
            app.apply(BoardAction::AddTask);
        }
        let vm = app.view_model(4);
        let todo = &vm.columns[0];
        assert_eq!(todo.task_count, 10);
        assert_eq!(todo.cards.len(), 4);
        assert_eq!(todo.hidden_above, 6);
        assert_eq!(todo.hidden_below, 0);
        assert!(todo.cards.last().unwrap().is_selected);
    }

    #[test]
    fn test_view_model_forms() {
        let mut app = app();
        app.apply(BoardAction::OpenAddColumn);
        type_text(&mut app, "QA");
        let vm = app.view_model(5);
        assert!(vm.add_column.is_open);
        assert_eq!(vm.add_column.input, "QA");

        app.apply(BoardAction::Cancel);
        app.apply(BoardAction::RenameColumn);
        let vm = app.view_model(5);
        assert_eq!(vm.columns[0].rename_input.as_deref(), Some("To Do"));
        assert!(vm.columns[1].rename_input.is_none());
    }

    #[test]
    #[serial]
    fn test_toggle_theme_persists() {
        theme::set_mode(ThemeMode::Dark);
        let kv = MemoryKeyValueStore::new();
        let controller = BoardController::load(
            Box::new(LocalBoardStore::new(kv.clone())),
            Box::new(UuidGenerator),
        );
        let mut app = BoardApp::new(controller, Arc::new(kv.clone()));

        app.apply(BoardAction::ToggleTheme);

        assert_eq!(theme::mode(), ThemeMode::Light);
        assert_eq!(
            theme::load_mode(&kv, ThemeMode::Dark),
            ThemeMode::Light
        );
        assert_eq!(app.view_model(5).theme_mode, ThemeMode::Light);
        theme::set_mode(ThemeMode::Dark);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(app.apply(BoardAction::Quit), ActionOutcome::Quit);
        assert_eq!(app.apply(BoardAction::MoveDown), ActionOutcome::Continue);
    }
}
