//! Board data model: columns, tasks and the ordered board mapping.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use jiff::civil::Date;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BoardError;

/// Title given to a task created with the "add task" action
pub const DEFAULT_TASK_TITLE: &str = "New Task";

/// Columns of a fresh board: (id, title)
pub const DEFAULT_COLUMNS: [(&str, &str); 3] = [
    ("todo", "To Do"),
    ("inProgress", "In Progress"),
    ("done", "Done"),
];

crate::string_id!(
    /// Opaque identifier of a column
    ColumnId
);

crate::string_id!(
    /// Opaque identifier of a task
    TaskId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire form, as stored in the board blob
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Human-readable label used on badges ("in progress")
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Next status in display order (wrapping)
    pub fn next(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    /// Previous status in display order (wrapping)
    pub fn prev(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::InProgress => TaskStatus::Pending,
            TaskStatus::Completed => TaskStatus::InProgress,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" | "in progress" | "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(BoardError::InvalidStatus(s.to_string())),
        }
    }
}

/// Parse a due date in `YYYY-MM-DD` form; blank input means "no due date"
pub fn parse_due_date(input: &str) -> Result<Option<Date>, BoardError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Date>()
        .map(Some)
        .map_err(|_| BoardError::InvalidDate(trimmed.to_string()))
}

/// Format a due date as `Mon D, YYYY`
pub fn format_due_date(date: Date) -> String {
    date.strftime("%b %-d, %Y").to_string()
}

/// Serde adapter storing an optional date as `""` when absent
mod due_date_format {
    use super::*;

    pub fn serialize<S: Serializer>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) => parse_due_date(&raw).map_err(de::Error::custom),
        }
    }
}

fn epoch() -> Timestamp {
    Timestamp::UNIX_EPOCH
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "due_date_format")]
    pub due_date: Option<Date>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default = "epoch")]
    pub created_at: Timestamp,
}

impl Task {
    /// A task as created by the "add task" action
    pub fn new(id: TaskId, created_at: Timestamp) -> Self {
        Self {
            id,
            title: DEFAULT_TASK_TITLE.to_string(),
            description: String::new(),
            due_date: None,
            status: TaskStatus::Pending,
            created_at,
        }
    }

    /// Merge the `Some` fields of a patch into this task
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Partial update for a task; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `Some(None)` clears the due date
    pub due_date: Option<Option<Date>>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *task_id)
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.task(task_id).is_some()
    }

    pub fn apply(&mut self, patch: ColumnPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}

/// Partial update for a column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPatch {
    pub title: Option<String>,
}

impl ColumnPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// Ordered mapping of column id to column
///
/// Iteration order is the left-to-right display order. The JSON form is an
/// object keyed by column id, in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    columns: Vec<Column>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three-column board used when nothing has been stored yet
    pub fn default_board() -> Self {
        Self {
            columns: DEFAULT_COLUMNS
                .iter()
                .map(|(id, title)| Column::new(ColumnId::from(*id), *title))
                .collect(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == *id)
    }

    pub fn column_mut(&mut self, id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == *id)
    }

    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == *id)
    }

    /// Append a column; an existing column with the same id is replaced in place
    pub fn insert(&mut self, column: Column) {
        match self.column_mut(&column.id) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Column> {
        let index = self.column_index(id)?;
        Some(self.columns.remove(index))
    }

    /// Column currently holding the task, found by scanning every column
    pub fn column_of(&self, task_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.contains_task(task_id))
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.columns.iter().find_map(|c| c.task(task_id))
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

impl Serialize for BoardState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(column.id.as_str(), column)?;
        }
        map.end()
    }
}

struct BoardStateVisitor;

impl<'de> Visitor<'de> for BoardStateVisitor {
    type Value = BoardState;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping column ids to columns")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<BoardState, A::Error> {
        let mut columns: Vec<Column> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut task_ids: HashSet<TaskId> = HashSet::new();
        while let Some((key, column)) = access.next_entry::<String, Column>()? {
            if column.id != *key.as_str() {
                return Err(de::Error::custom(format!(
                    "column key '{}' does not match column id '{}'",
                    key, column.id
                )));
            }
            if columns.iter().any(|c| c.id == column.id) {
                return Err(de::Error::custom(format!("duplicate column id '{}'", key)));
            }
            if let Some(task) = column.tasks.iter().find(|t| !task_ids.insert(t.id.clone())) {
                return Err(de::Error::custom(format!("duplicate task id '{}'", task.id)));
            }
            columns.push(column);
        }
        Ok(BoardState { columns })
    }
}

impl<'de> Deserialize<'de> for BoardState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BoardStateVisitor)
    }
}
