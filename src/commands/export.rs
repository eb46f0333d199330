//! `export` and `reset`

use tracing::warn;

use super::Workspace;
use crate::error::Result;

/// Print the persisted board blob
///
/// When nothing is stored yet the default board is printed in the same
/// format, so the output can always be fed back in.
pub fn cmd_export() -> Result<()> {
    let workspace = Workspace::open()?;
    let store = workspace.board_store();

    let blob = match store.raw()? {
        Some(raw) => raw,
        None => serde_json::to_string(workspace.controller().state())?,
    };
    println!("{blob}");
    Ok(())
}

/// Replace the stored board with the default three columns
pub fn cmd_reset() -> Result<()> {
    let workspace = Workspace::open()?;
    let mut controller = workspace.controller();
    let discarded = controller.state().task_count();
    controller.reset();
    controller.save()?;

    if discarded > 0 {
        warn!(discarded, "board reset");
    }
    println!("Board reset ({discarded} task(s) discarded)");
    Ok(())
}
