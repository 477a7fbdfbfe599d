//! Export orchestration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use plcsnap_core::{ExportConfig, ExportError, ExportWarning, Project, WarningKind};
use plcsnap_load::{Credentials, LoadError, ProjectLoader};

use crate::item::Item;
use crate::manifest::write_manifest;
use crate::walker::TreeWalker;
use crate::writer::{Category, DEVICE_MANIFEST_FILE, ExportContext, FileWriter, PROJECT_TREE_FILE};

/// Errors from a load-then-export run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Outcome of a completed export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Number of items in `project_tree.xml`, root included.
    pub items: usize,
    /// Files written per category.
    pub files: BTreeMap<Category, usize>,
    /// Entities skipped, and a manifest failure if any.
    pub warnings: Vec<ExportWarning>,
    /// Devices in the manifest; `None` when it was disabled or failed.
    pub devices: Option<usize>,
    /// Wall time of the export.
    pub duration: Duration,
}

impl ExportReport {
    /// Total number of content files written.
    pub fn total_files(&self) -> usize {
        self.files.values().sum()
    }

    /// Whether any entity was skipped or the manifest failed.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Writes project snapshots according to an [`ExportConfig`].
#[derive(Debug, Clone)]
pub struct Exporter {
    config: ExportConfig,
    context: ExportContext,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        let context = ExportContext::new(&config.output_root);
        Self { config, context }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Create the output root and empty every category directory.
    pub fn prepare(&self) -> Result<(), ExportError> {
        self.context.prepare()
    }

    /// Prepare the output root, then export `project` into it.
    ///
    /// The project's mnemonic convention is switched to the configured one
    /// first. Failing entities are skipped and reported; I/O failures abort.
    pub fn export(&self, project: &mut Project) -> Result<ExportReport, ExportError> {
        self.prepare()?;
        self.export_prepared(project)
    }

    /// Export into an output root that was already prepared.
    pub fn export_prepared(&self, project: &mut Project) -> Result<ExportReport, ExportError> {
        let start = Instant::now();
        project.language = self.config.language;

        info!(
            output = %self.context.output_root().display(),
            language = ?project.language,
            "exporting project"
        );

        let mut writer = FileWriter::new(&self.context);
        let mut walker = TreeWalker::new(&mut writer, project.language);
        let root = walker.walk(&project.structure)?;
        let mut warnings = walker.into_warnings();

        self.write_project_tree(&root)?;

        let devices = if self.config.write_manifest {
            match write_manifest(&self.context, project.stations()) {
                Ok(devices) => Some(devices.len()),
                Err(e) => {
                    error!(error = %e, "failed to write device manifest");
                    warnings.push(ExportWarning::new(
                        DEVICE_MANIFEST_FILE,
                        e.to_string(),
                        WarningKind::ManifestFailed,
                    ));
                    None
                }
            }
        } else {
            None
        };

        let report = ExportReport {
            items: root.count(),
            files: writer.written().clone(),
            warnings,
            devices,
            duration: start.elapsed(),
        };

        info!(
            items = report.items,
            files = report.total_files(),
            warnings = report.warnings.len(),
            elapsed_ms = report.duration.as_millis() as u64,
            "export complete"
        );

        Ok(report)
    }

    /// Prepare the output root, load the project and export it.
    ///
    /// Credentials are handed to the loader and dropped with the call.
    pub fn run<L: ProjectLoader>(
        &self,
        loader: &L,
        path: &Path,
        credentials: Option<Credentials>,
    ) -> Result<ExportReport, RunError> {
        self.prepare()?;
        let mut project = loader.load(path, credentials)?;
        Ok(self.export_prepared(&mut project)?)
    }

    fn write_project_tree(&self, root: &Item) -> Result<(), ExportError> {
        let xml = root.to_project_tree()?;
        let path = self.context.top_level_file(PROJECT_TREE_FILE);
        fs::write(&path, xml).map_err(|e| ExportError::io(&path, e))
    }
}
