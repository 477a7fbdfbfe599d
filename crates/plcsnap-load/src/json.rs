//! Loader for JSON project descriptions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use plcsnap_core::{Mnemonic, Project, ProjectNode};

use crate::credentials::Credentials;
use crate::error::LoadError;
use crate::ProjectLoader;

/// Access protection declared by a project description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Protection {
    pub username: String,
    /// Lowercase hex SHA-256 of the password.
    pub password_sha256: String,
}

impl Protection {
    fn admits(&self, credentials: &Credentials) -> bool {
        credentials.username == self.username
            && credentials
                .password
                .sha256_hex()
                .eq_ignore_ascii_case(&self.password_sha256)
    }
}

/// On-disk layout of a project description.
#[derive(Debug, Deserialize)]
struct ProjectDescription {
    #[serde(default)]
    language: Mnemonic,
    structure: ProjectNode,
    #[serde(default)]
    protection: Option<Protection>,
}

/// Reads a project tree from a JSON description.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProjectLoader;

impl JsonProjectLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Parse a description already read into memory.
    pub fn parse(
        &self,
        path: &Path,
        text: &str,
        credentials: Option<Credentials>,
    ) -> Result<Project, LoadError> {
        let description: ProjectDescription =
            serde_json::from_str(text).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(protection) = &description.protection {
            let credentials = credentials.ok_or_else(|| LoadError::CredentialsRequired {
                path: path.to_path_buf(),
            })?;
            if !protection.admits(&credentials) {
                return Err(LoadError::AccessDenied {
                    path: path.to_path_buf(),
                });
            }
            debug!(user = %credentials.username, "project unlocked");
        }

        validate_structure(path, &description.structure)?;
        Ok(Project::new(description.language, description.structure))
    }
}

/// Every node whose kind produces files must carry a structured name, since
/// that name is the identifier the file names are derived from.
fn validate_structure(path: &Path, root: &ProjectNode) -> Result<(), LoadError> {
    match root
        .iter()
        .skip(1)
        .find(|node| node.kind.needs_logical_id() && node.structured_name.is_empty())
    {
        Some(node) => Err(LoadError::MissingStructuredName {
            path: path.to_path_buf(),
            node: node.name.to_string(),
        }),
        None => Ok(()),
    }
}

impl ProjectLoader for JsonProjectLoader {
    fn load(&self, path: &Path, credentials: Option<Credentials>) -> Result<Project, LoadError> {
        info!(path = %path.display(), "loading project");
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        self.parse(path, &text, credentials)
    }
}
