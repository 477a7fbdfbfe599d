//! Errors raised while loading a project.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a project from being loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Project file not found.
    #[error("Project not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project description is malformed.
    #[error("Invalid project description {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The project is protected and no credentials were given.
    #[error("Project {path} is protected, credentials required")]
    CredentialsRequired { path: PathBuf },

    /// A node that names output files has no structured name.
    #[error("Node {node} in {path} has no structured name")]
    MissingStructuredName { path: PathBuf, node: String },

    /// The given credentials do not unlock the project.
    #[error("Access to project {path} denied")]
    AccessDenied { path: PathBuf },
}

impl LoadError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
