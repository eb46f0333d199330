//! Column commands: `column add`, `column rename`, `column rm`

use tracing::info;

use super::{Workspace, require_column};
use crate::error::{BoardError, Result};
use crate::types::ColumnPatch;

/// Append a column and print its id
pub fn cmd_column_add(title: &str) -> Result<()> {
    let mut controller = Workspace::open()?.controller();
    let id = controller.add_column(title).ok_or(BoardError::EmptyTitle)?;
    controller.save()?;

    info!(column = %id, "added column from cli");
    println!("{id}");
    Ok(())
}

pub fn cmd_column_rename(id: &str, title: &str) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(BoardError::EmptyTitle);
    }

    let mut controller = Workspace::open()?.controller();
    require_column(&controller, id)?;
    if controller.update_column(id, ColumnPatch::title(title)) {
        controller.save()?;
    }

    println!("Renamed column {id} to \"{title}\"");
    Ok(())
}

/// Delete a column together with its tasks
pub fn cmd_column_rm(id: &str) -> Result<()> {
    let mut controller = Workspace::open()?.controller();
    let removed = require_column(&controller, id)?.tasks.len();
    controller.delete_column(id);
    controller.save()?;

    match removed {
        0 => println!("Deleted column {id}"),
        n => println!("Deleted column {id} and {n} task(s)"),
    }
    Ok(())
}
