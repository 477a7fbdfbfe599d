//! Export configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::block::Mnemonic;

/// Configuration for an export run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ExportConfig {
    /// Directory receiving the snapshot. Created if absent.
    pub output_root: PathBuf,

    /// Mnemonic convention forced on the project before export.
    #[builder(default)]
    #[serde(default)]
    pub language: Mnemonic,

    /// Write `devices_connection_information.json`.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub write_manifest: bool,
}

fn default_true() -> bool {
    true
}

impl ExportConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.output_root {
            Some(ref root) if root.as_os_str().is_empty() => {
                Err("Output root cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Output root is required".to_string()),
        }
    }
}

impl ExportConfig {
    /// Create a new export config builder.
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    /// Create a simple config exporting to a directory.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            language: Mnemonic::English,
            write_manifest: true,
        }
    }
}
