//! Error types for export operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be rendered.
    #[error("Failed to render {document}: {message}")]
    Render { document: String, message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ExportError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a render error for the named document.
    pub fn render(document: impl Into<String>, message: impl ToString) -> Self {
        Self::Render {
            document: document.into(),
            message: message.to_string(),
        }
    }
}

/// Kind of export warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A program block was skipped.
    BlockSkipped,
    /// A source entry was skipped.
    SourceSkipped,
    /// The device manifest could not be written.
    ManifestFailed,
}

/// Non-fatal problem encountered during export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportWarning {
    /// Name of the entity the warning refers to.
    pub entity: String,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ExportWarning {
    /// Create a new export warning.
    pub fn new(entity: impl Into<String>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            entity: entity.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a skipped-block warning.
    pub fn block_skipped(block: &str, block_type: &str, reason: impl std::fmt::Display) -> Self {
        Self {
            entity: block.to_string(),
            message: format!("Error when extracting block {block} of type {block_type}: {reason}"),
            kind: WarningKind::BlockSkipped,
        }
    }

    /// Create a skipped-source warning.
    pub fn source_skipped(source: &str, reason: impl std::fmt::Display) -> Self {
        Self {
            entity: source.to_string(),
            message: format!("Error when extracting source {source}: {reason}"),
            kind: WarningKind::SourceSkipped,
        }
    }
}
