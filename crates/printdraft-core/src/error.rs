//! Error types for editor operations.

use crate::element::ElementId;
use thiserror::Error;

/// Errors surfaced by the editor.
///
/// A command that fails leaves the document exactly as it was.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Element id already in use: {0}")]
    DuplicateId(ElementId),
    #[error("Invalid canvas size {width}x{height}: both dimensions must be positive")]
    InvalidDimension { width: f64, height: f64 },
    #[error("Element {0} has a non-finite position, size or style value")]
    NonFiniteValue(ElementId),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
