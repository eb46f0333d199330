//! Task edit form state
//!
//! The form holds uncommitted text for every field of one task. Nothing
//! reaches the board until [`TaskDraft::to_patch`] succeeds and the caller
//! commits the patch.

use crate::error::{BoardError, Result};
use crate::types::{ColumnId, Task, TaskId, TaskPatch, TaskStatus, parse_due_date};

/// Focusable fields of the edit form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Title,
    Description,
    DueDate,
    Status,
}

impl EditField {
    pub const ALL: [EditField; 4] = [
        EditField::Title,
        EditField::Description,
        EditField::DueDate,
        EditField::Status,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditField::Title => "Title",
            EditField::Description => "Description",
            EditField::DueDate => "Due date",
            EditField::Status => "Status",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the field takes typed characters
    pub fn is_text(self) -> bool {
        !matches!(self, EditField::Status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub column_id: ColumnId,
    pub task_id: TaskId,
    pub title: String,
    pub description: String,
    /// Raw `YYYY-MM-DD` text; blank clears the due date
    pub due_date: String,
    pub status: TaskStatus,
    pub focused: EditField,
    /// Validation message from the last failed submit
    pub error: Option<String>,
}

impl TaskDraft {
    /// Form pre-populated from `task`
    pub fn from_task(column_id: ColumnId, task: &Task) -> Self {
        Self {
            column_id,
            task_id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.map(|d| d.to_string()).unwrap_or_default(),
            status: task.status,
            focused: EditField::Title,
            error: None,
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focused {
            EditField::Title => Some(&mut self.title),
            EditField::Description => Some(&mut self.description),
            EditField::DueDate => Some(&mut self.due_date),
            EditField::Status => None,
        }
    }

    pub fn input(&mut self, c: char) {
        let single_line = self.focused != EditField::Description;
        if single_line && c == '\n' {
            return;
        }
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn cycle_status(&mut self, forward: bool) {
        self.status = if forward {
            self.status.next()
        } else {
            self.status.prev()
        };
    }

    /// Every field as one patch. Fails on a blank title or bad due date.
    pub fn to_patch(&self) -> Result<TaskPatch> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let due_date = parse_due_date(&self.due_date)?;
        Ok(TaskPatch {
            title: Some(title.to_string()),
            description: Some(self.description.clone()),
            due_date: Some(due_date),
            status: Some(self.status),
        })
    }
}
