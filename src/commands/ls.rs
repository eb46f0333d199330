use super::{Workspace, print_json};
use crate::display::format_board;
use crate::error::Result;

/// List columns and their tasks
///
/// `--json` prints the board exactly as it is persisted.
pub fn cmd_ls(json: bool) -> Result<()> {
    let controller = Workspace::open()?.controller();

    if json {
        return print_json(controller.state());
    }

    println!("{}", format_board(controller.state()));
    let total = controller.state().task_count();
    println!(
        "\n{} column(s), {} task(s)",
        controller.state().len(),
        total
    );
    Ok(())
}
