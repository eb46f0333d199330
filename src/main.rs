use clap::Parser;
use std::process::ExitCode;

use tackboard::cli::{Cli, Commands};
use tackboard::config::Config;
use tackboard::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // A broken config file is reported by the command itself
    let config = Config::load().unwrap_or_default();
    if let Err(e) = logging::init(&config) {
        eprintln!("warning: logging disabled: {e}");
    }

    let command = cli.command.unwrap_or(Commands::Board);
    match command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
