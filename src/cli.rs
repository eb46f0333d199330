use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::types::TaskStatus;

#[derive(Parser)]
#[command(name = "tackboard")]
#[command(about = "Local-first kanban board for the terminal")]
#[command(version)]
pub struct Cli {
    /// Defaults to `board` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive board (default)
    #[command(visible_alias = "b")]
    Board,

    /// List columns and tasks
    Ls {
        /// Print the persisted board JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage columns
    Column {
        #[command(subcommand)]
        action: ColumnAction,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Print the stored board blob
    Export,

    /// Replace the board with the default columns
    Reset,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Append a column
    Add {
        /// Column title
        title: String,
    },
    /// Change a column's title
    Rename {
        /// Column ID
        id: String,
        /// New title
        title: String,
    },
    /// Delete a column and its tasks
    #[command(visible_alias = "delete")]
    Rm {
        /// Column ID
        id: String,
    },
}

/// Optional task fields shared by `task add` and `task edit`
#[derive(clap::Args, Debug, Default)]
pub struct TaskFieldArgs {
    /// Task title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Description text
    #[arg(short, long)]
    pub description: Option<String>,

    /// Due date (YYYY-MM-DD, empty to clear)
    #[arg(long)]
    pub due: Option<String>,

    /// Status: pending, in-progress, completed
    #[arg(short, long, value_parser = parse_status)]
    pub status: Option<TaskStatus>,
}

impl From<TaskFieldArgs> for crate::commands::TaskFields {
    fn from(args: TaskFieldArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            due: args.due,
            status: args.status,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to a column
    Add {
        /// Column ID
        column: String,
        #[command(flatten)]
        fields: TaskFieldArgs,
    },
    /// Edit fields of a task
    Edit {
        /// Column ID holding the task
        column: String,
        /// Task ID
        task: String,
        #[command(flatten)]
        fields: TaskFieldArgs,
    },
    /// Delete a task
    #[command(visible_alias = "delete")]
    Rm {
        /// Column ID holding the task
        column: String,
        /// Task ID
        task: String,
    },
    /// Move a task to the end of another column
    #[command(visible_alias = "mv")]
    Move {
        /// Task ID
        task: String,
        /// Destination column ID
        column: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (storage_dir, theme, log_level)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (storage_dir, theme, log_level)
        key: String,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_board, cmd_column_add, cmd_column_rename, cmd_column_rm, cmd_config_get,
            cmd_config_set, cmd_config_show, cmd_export, cmd_ls, cmd_reset, cmd_task_add,
            cmd_task_edit, cmd_task_move, cmd_task_rm,
        };

        match self {
            Commands::Board => cmd_board().await,
            Commands::Ls { json } => cmd_ls(json),

            Commands::Column { action } => match action {
                ColumnAction::Add { title } => cmd_column_add(&title),
                ColumnAction::Rename { id, title } => cmd_column_rename(&id, &title),
                ColumnAction::Rm { id } => cmd_column_rm(&id),
            },

            Commands::Task { action } => match action {
                TaskAction::Add { column, fields } => cmd_task_add(&column, fields.into()),
                TaskAction::Edit {
                    column,
                    task,
                    fields,
                } => cmd_task_edit(&column, &task, fields.into()),
                TaskAction::Rm { column, task } => cmd_task_rm(&column, &task),
                TaskAction::Move { task, column } => cmd_task_move(&task, &column),
            },

            Commands::Export => cmd_export(),
            Commands::Reset => cmd_reset(),

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
                ConfigAction::Get { key } => cmd_config_get(&key),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    s.parse().map_err(|_| {
        let valid: Vec<_> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
        format!("Invalid status. Must be one of: {}", valid.join(", "))
    })
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "tackboard", &mut io::stdout());
}
