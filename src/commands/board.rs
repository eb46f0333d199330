//! Kanban board command (`tackboard board`)

use iocraft::prelude::*;
use tracing::info;

use super::Workspace;
use crate::error::Result;
use crate::tui::board::model::BoardApp;
use crate::tui::theme;
use crate::tui::KanbanBoard;

/// Launch the kanban board TUI
pub async fn cmd_board() -> Result<()> {
    let workspace = Workspace::open()?;
    let prefs = workspace.prefs();

    // Stored preference wins over the configured default
    let mode = theme::load_mode(prefs.as_ref(), workspace.config.theme);
    theme::set_mode(mode);

    let controller = workspace.controller();
    info!(
        columns = controller.state().len(),
        tasks = controller.state().task_count(),
        "opening board"
    );
    let app = BoardApp::new(controller, prefs);

    element!(KanbanBoard(app: Some(app))).fullscreen().await?;
    info!("board closed");
    Ok(())
}
