//! Plain-terminal rendering of the board for the CLI
//!
//! Colors are applied only when stdout supports them, so piped output
//! stays free of escape codes.

use owo_colors::{OwoColorize, Stream};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::types::{BoardState, Column, Task, TaskStatus, format_due_date};
use crate::utils::truncate_string;

const TITLE_WIDTH: usize = 40;

/// `[status]` badge colored by status
pub fn format_status_colored(status: TaskStatus) -> String {
    let badge = format!("[{}]", status.label());
    match status {
        TaskStatus::Pending => badge
            .if_supports_color(Stream::Stdout, |s| s.yellow())
            .to_string(),
        TaskStatus::InProgress => badge
            .if_supports_color(Stream::Stdout, |s| s.cyan())
            .to_string(),
        TaskStatus::Completed => badge
            .if_supports_color(Stream::Stdout, |s| s.green())
            .to_string(),
    }
}

/// Column heading line, e.g. `To Do (todo) - 2 tasks`
pub fn format_column_heading(column: &Column) -> String {
    let count = match column.tasks.len() {
        1 => "1 task".to_string(),
        n => format!("{n} tasks"),
    };
    format!(
        "{} ({}) - {}",
        column
            .title
            .if_supports_color(Stream::Stdout, |s| s.bold()),
        column.id.if_supports_color(Stream::Stdout, |s| s.dimmed()),
        count
    )
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            title: truncate_string(&task.title, TITLE_WIDTH),
            due: task
                .due_date
                .map(format_due_date)
                .unwrap_or_else(|| "-".to_string()),
            status: task.status.label().to_string(),
        }
    }
}

/// Table of the tasks in one column
pub fn format_task_table(tasks: &[Task]) -> String {
    let mut table = Table::new(tasks.iter().map(TaskRow::from));
    table.with(Style::rounded());
    table.to_string()
}

/// Whole board: one heading and table per column, in display order
pub fn format_board(state: &BoardState) -> String {
    if state.is_empty() {
        return "No columns.".to_string();
    }

    let sections: Vec<String> = state
        .columns()
        .iter()
        .map(|column| {
            if column.tasks.is_empty() {
                format!("{}\n  (empty)", format_column_heading(column))
            } else {
                format!(
                    "{}\n{}",
                    format_column_heading(column),
                    format_task_table(&column.tasks)
                )
            }
        })
        .collect();
    sections.join("\n\n")
}

/// One-line description of a task for command confirmations
pub fn format_task_line(task: &Task) -> String {
    let mut line = format!(
        "{} {} {}",
        task.id.if_supports_color(Stream::Stdout, |s| s.cyan()),
        format_status_colored(task.status),
        task.title
    );
    if let Some(due) = task.due_date {
        line.push_str(&format!(" (due {})", format_due_date(due)));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnId, TaskId};
    use jiff::Timestamp;

    fn task(id: &str, title: &str) -> Task {
        let mut task = Task::new(TaskId::new(id), Timestamp::UNIX_EPOCH);
        task.title = title.to_string();
        task
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(format_board(&BoardState::new()), "No columns.");
    }

    #[test]
    fn test_board_lists_every_column() {
        let mut state = BoardState::default_board();
        if let Some(todo) = state.column_mut("todo") {
            todo.tasks.push(task("t-1", "Write docs"));
        }
        let out = format_board(&state);
        assert!(out.contains("To Do"));
        assert!(out.contains("In Progress"));
        assert!(out.contains("Write docs"));
        assert!(out.contains("t-1"));
        assert!(out.contains("(empty)"));
    }

    #[test]
    fn test_task_row_formats_due_date() {
        let mut t = task("t-2", "Ship");
        t.due_date = Some(jiff::civil::date(2024, 3, 5));
        let row = TaskRow::from(&t);
        assert_eq!(row.due, "Mar 5, 2024");
        assert_eq!(row.status, "pending");
    }

    #[test]
    fn test_column_heading_count() {
        let mut column = Column::new(ColumnId::new("qa"), "QA");
        column.tasks.push(task("t-3", "Check"));
        assert!(format_column_heading(&column).contains("1 task"));
    }
}
