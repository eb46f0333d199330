//! Task commands: `task add`, `task edit`, `task rm`, `task move`

use tracing::info;

use super::{Workspace, require_column};
use crate::board::BoardController;
use crate::display::format_task_line;
use crate::error::{BoardError, Result};
use crate::types::{TaskPatch, TaskStatus, parse_due_date};

/// Field values given on the command line
#[derive(Debug, Default, Clone)]
pub struct TaskFields {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD`; an empty string clears the due date
    pub due: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskFields {
    /// Validate into a patch. Titles are trimmed and must not be blank.
    pub fn to_patch(&self) -> Result<TaskPatch> {
        let title = match &self.title {
            Some(t) if t.trim().is_empty() => return Err(BoardError::EmptyTitle),
            Some(t) => Some(t.trim().to_string()),
            None => None,
        };
        let due_date = match &self.due {
            Some(raw) => Some(parse_due_date(raw)?),
            None => None,
        };
        Ok(TaskPatch {
            title,
            description: self.description.clone(),
            due_date,
            status: self.status,
        })
    }
}

/// Ensure `task_id` lives in `column_id`
fn require_task_in(controller: &BoardController, column_id: &str, task_id: &str) -> Result<()> {
    let column = require_column(controller, column_id)?;
    if column.contains_task(task_id) {
        return Ok(());
    }
    if controller.find_task(task_id).is_some() {
        Err(BoardError::TaskNotInColumn {
            task: task_id.to_string(),
            column: column_id.to_string(),
        })
    } else {
        Err(BoardError::TaskNotFound(task_id.to_string()))
    }
}

/// Add a task to a column and print it
pub fn cmd_task_add(column_id: &str, fields: TaskFields) -> Result<()> {
    // Validate before touching the board so a bad flag adds nothing
    let patch = fields.to_patch()?;

    let mut controller = Workspace::open()?.controller();
    require_column(&controller, column_id)?;
    let task_id = controller
        .add_task(column_id)
        .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;
    if !patch.is_empty() {
        controller.update_task(column_id, &task_id, patch);
    }
    controller.save()?;

    info!(task = %task_id, column = column_id, "added task from cli");
    if let Some(task) = controller.find_task(&task_id) {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

pub fn cmd_task_edit(column_id: &str, task_id: &str, fields: TaskFields) -> Result<()> {
    let patch = fields.to_patch()?;

    let mut controller = Workspace::open()?.controller();
    require_task_in(&controller, column_id, task_id)?;
    if patch.is_empty() {
        println!("Nothing to update");
        return Ok(());
    }
    controller.update_task(column_id, task_id, patch);
    controller.save()?;

    if let Some(task) = controller.find_task(task_id) {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

pub fn cmd_task_rm(column_id: &str, task_id: &str) -> Result<()> {
    let mut controller = Workspace::open()?.controller();
    require_task_in(&controller, column_id, task_id)?;
    controller.delete_task(column_id, task_id);
    controller.save()?;

    println!("Deleted task {task_id}");
    Ok(())
}

/// Move a task to the end of another column
pub fn cmd_task_move(task_id: &str, destination: &str) -> Result<()> {
    let mut controller = Workspace::open()?.controller();
    let source = controller
        .column_of(task_id)
        .map(|c| c.id.clone())
        .ok_or_else(|| BoardError::TaskNotFound(task_id.to_string()))?;
    let dest_title = require_column(&controller, destination)?.title.clone();

    if source == destination {
        println!("Task {task_id} is already in {dest_title}");
        return Ok(());
    }

    controller.move_task(task_id, destination);
    controller.save()?;

    info!(task = task_id, from = %source, to = destination, "moved task from cli");
    println!("Moved task {task_id} to {dest_title}");
    Ok(())
}
