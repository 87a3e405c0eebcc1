//! Application error types.

use printdraft_core::EditorError;
use thiserror::Error;

/// Errors surfaced by the command-line shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
