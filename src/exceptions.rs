use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbookError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No record with roll number {0}")]
    NotFound(String),

    #[error("Unable to open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
