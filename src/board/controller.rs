//! Board controller: the single owner of board state
//!
//! Every mutation goes through here. Operations that reference stale or
//! unknown identifiers are silent no-ops; any call that changes state is
//! followed by a full save through the [`BoardStore`].

use jiff::Timestamp;
use tracing::{debug, warn};

use super::drag::DragEvent;
use crate::error::Result;
use crate::storage::BoardStore;
use crate::types::{BoardState, Column, ColumnId, ColumnPatch, Task, TaskId, TaskPatch};
use crate::utils::IdGenerator;

pub struct BoardController {
    store: Box<dyn BoardStore>,
    ids: Box<dyn IdGenerator>,
    state: BoardState,
    active_drag: Option<Task>,
    adding_column: bool,
}

impl std::fmt::Debug for BoardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardController")
            .field("state", &self.state)
            .field("active_drag", &self.active_drag)
            .field("adding_column", &self.adding_column)
            .finish_non_exhaustive()
    }
}

impl BoardController {
    /// Controller over an explicit initial state. Nothing is written until
    /// the first mutation.
    pub fn new(store: Box<dyn BoardStore>, ids: Box<dyn IdGenerator>, state: BoardState) -> Self {
        Self {
            store,
            ids,
            state,
            active_drag: None,
            adding_column: false,
        }
    }

    /// Read the store once, falling back to the default board
    pub fn load(store: Box<dyn BoardStore>, ids: Box<dyn IdGenerator>) -> Self {
        let state = store.load().unwrap_or_else(|| {
            debug!("starting from the default board");
            BoardState::default_board()
        });
        Self::new(store, ids, state)
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Snapshot of the task currently being dragged
    pub fn active_drag(&self) -> Option<&Task> {
        self.active_drag.as_ref()
    }

    pub fn is_adding_column(&self) -> bool {
        self.adding_column
    }

    pub fn set_adding_column(&mut self, adding: bool) {
        self.adding_column = adding;
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.state.find_task(task_id)
    }

    pub fn column_of(&self, task_id: &str) -> Option<&Column> {
        self.state.column_of(task_id)
    }

    /// Write the current state, reporting failure to the caller
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.state)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to save board");
        }
    }

    /// Append a new empty column. Blank titles are rejected.
    pub fn add_column(&mut self, title: &str) -> Option<ColumnId> {
        let title = title.trim();
        if title.is_empty() {
            debug!("ignoring add_column with blank title");
            return None;
        }
        let id = ColumnId::new(self.ids.generate());
        self.state.insert(Column::new(id.clone(), title));
        self.adding_column = false;
        debug!(column = %id, title, "added column");
        self.persist();
        Some(id)
    }

    /// Merge `patch` into the column; returns whether anything changed
    pub fn update_column(&mut self, column_id: &str, patch: ColumnPatch) -> bool {
        let Some(column) = self.state.column_mut(column_id) else {
            return false;
        };
        let before = column.clone();
        column.apply(patch);
        if *column == before {
            return false;
        }
        debug!(column = column_id, "updated column");
        self.persist();
        true
    }

    /// Remove the column together with its tasks
    pub fn delete_column(&mut self, column_id: &str) -> bool {
        match self.state.remove(column_id) {
            Some(column) => {
                debug!(
                    column = column_id,
                    tasks = column.tasks.len(),
                    "deleted column"
                );
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Append a default task to the column
    pub fn add_task(&mut self, column_id: &str) -> Option<TaskId> {
        let id = TaskId::new(self.ids.generate());
        let column = self.state.column_mut(column_id)?;
        column.tasks.push(Task::new(id.clone(), Timestamp::now()));
        debug!(column = column_id, task = %id, "added task");
        self.persist();
        Some(id)
    }

    /// Merge `patch` into the task, looked up in `column_id` only
    pub fn update_task(&mut self, column_id: &str, task_id: &str, patch: TaskPatch) -> bool {
        let Some(task) = self
            .state
            .column_mut(column_id)
            .and_then(|c| c.tasks.iter_mut().find(|t| t.id == *task_id))
        else {
            return false;
        };
        let before = task.clone();
        task.apply(patch);
        if *task == before {
            return false;
        }
        debug!(column = column_id, task = task_id, "updated task");
        self.persist();
        true
    }

    pub fn delete_task(&mut self, column_id: &str, task_id: &str) -> bool {
        let Some(column) = self.state.column_mut(column_id) else {
            return false;
        };
        let before = column.tasks.len();
        column.tasks.retain(|t| t.id != *task_id);
        if column.tasks.len() == before {
            return false;
        }
        debug!(column = column_id, task = task_id, "deleted task");
        self.persist();
        true
    }

    /// Remember a snapshot of the dragged task for the overlay
    pub fn handle_drag_start(&mut self, task_id: &str) {
        self.active_drag = self.state.find_task(task_id).cloned();
        if self.active_drag.is_none() {
            debug!(task = task_id, "drag started on unknown task");
        }
    }

    /// Move the task from `source` to the end of `destination`.
    ///
    /// Same-column drops, drops outside any column and stale ids leave the
    /// board untouched. The drag snapshot is always cleared.
    pub fn handle_drag_end(
        &mut self,
        task_id: &str,
        source: &str,
        destination: Option<&str>,
    ) -> bool {
        self.active_drag = None;

        let Some(destination) = destination else {
            return false;
        };
        if source == destination || self.state.column(destination).is_none() {
            return false;
        }
        let Some(from) = self.state.column_mut(source) else {
            return false;
        };
        let Some(index) = from.tasks.iter().position(|t| t.id == *task_id) else {
            return false;
        };
        let task = from.tasks.remove(index);
        if let Some(to) = self.state.column_mut(destination) {
            to.tasks.push(task);
        }
        debug!(task = task_id, source, destination, "moved task");
        self.persist();
        true
    }

    pub fn handle_drag_event(&mut self, event: DragEvent) -> bool {
        match event {
            DragEvent::Started { item_id } => {
                self.handle_drag_start(&item_id);
                false
            }
            DragEvent::Ended {
                item_id,
                source,
                destination,
            } => self.handle_drag_end(&item_id, &source, destination.as_deref()),
        }
    }

    /// Move a task to `destination` wherever it currently lives
    pub fn move_task(&mut self, task_id: &str, destination: &str) -> bool {
        let Some(source) = self.state.column_of(task_id).map(|c| c.id.clone()) else {
            return false;
        };
        self.handle_drag_end(task_id, &source, Some(destination))
    }

    /// Replace everything with the default board
    pub fn reset(&mut self) {
        self.state = BoardState::default_board();
        self.active_drag = None;
        self.adding_column = false;
        debug!("reset board");
        self.persist();
    }
}
