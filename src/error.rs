use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("task '{0}' not found")]
    TaskNotFound(String),

    #[error("task '{task}' is not in column '{column}'")]
    TaskNotInColumn { task: String, column: String },

    #[error("invalid status '{0}' (expected pending, in-progress or completed)")]
    InvalidStatus(String),

    #[error("invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid theme '{0}' (expected light or dark)")]
    InvalidTheme(String),

    #[error("invalid log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("failed to {operation} {path}: {source}")]
    Storage {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
