//! Content-addressed file output.
//!
//! A file's name is the SHA-256 of the entity's logical identifier, so the
//! same entity lands on the same path on every export. The SHA-256 of the
//! written bytes is reported separately as the change-detection hash.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::debug;

use plcsnap_core::{ContentHash, ExportError};

use crate::xml::Element;

/// File name of the item-tree index.
pub const PROJECT_TREE_FILE: &str = "project_tree.xml";

/// File name of the device manifest.
pub const DEVICE_MANIFEST_FILE: &str = "devices_connection_information.json";

/// Output category; each maps to one subdirectory of the output root.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, IntoStaticStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Station and controller interface tables.
    Cpu,
    /// Communication module interface tables.
    Cp,
    Symbols,
    Sources,
    Blocks,
}

impl Category {
    /// Subdirectory name under the output root.
    pub fn dir_name(self) -> &'static str {
        self.into()
    }
}

/// SHA-256 of a byte string.
pub fn sha256(bytes: impl AsRef<[u8]>) -> ContentHash {
    ContentHash::new(Sha256::digest(bytes.as_ref()).into())
}

/// Reference to a written file, as embedded in the item tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    /// Path relative to the output root, always `/`-separated.
    pub path: String,
    /// SHA-256 of the written content.
    pub content_hash: ContentHash,
    /// Logical content type label.
    pub content_type: String,
}

/// Output root and category layout for one export run.
#[derive(Debug, Clone)]
pub struct ExportContext {
    output_root: PathBuf,
}

impl ExportContext {
    /// Create a context rooted at `output_root`.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Root directory of the snapshot.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Absolute directory of a category.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.output_root.join(category.dir_name())
    }

    /// Path of a top-level file.
    pub fn top_level_file(&self, name: &str) -> PathBuf {
        self.output_root.join(name)
    }

    /// Create the output root if absent and recreate every category
    /// directory empty.
    pub fn prepare(&self) -> Result<(), ExportError> {
        fs::create_dir_all(&self.output_root).map_err(|e| ExportError::io(&self.output_root, e))?;

        for category in Category::iter() {
            let dir = self.category_dir(category);
            if dir.exists() {
                fs::remove_dir_all(&dir).map_err(|e| ExportError::io(&dir, e))?;
            }
            fs::create_dir_all(&dir).map_err(|e| ExportError::io(&dir, e))?;
        }

        Ok(())
    }
}

/// Writes content documents under their naming hash.
#[derive(Debug)]
pub struct FileWriter<'a> {
    context: &'a ExportContext,
    written: BTreeMap<Category, usize>,
}

impl<'a> FileWriter<'a> {
    pub fn new(context: &'a ExportContext) -> Self {
        Self {
            context,
            written: BTreeMap::new(),
        }
    }

    /// Render `document`, write it to `<category>/<sha256(logical_id)>.xml`
    /// and return a reference carrying the content hash.
    pub fn write(
        &mut self,
        category: Category,
        logical_id: &str,
        content_type: &str,
        document: &Element,
    ) -> Result<FileReference, ExportError> {
        let content = document.to_document()?;
        self.write_text(category, logical_id, content_type, &content)
    }

    /// Write already rendered content.
    pub fn write_text(
        &mut self,
        category: Category,
        logical_id: &str,
        content_type: &str,
        content: &str,
    ) -> Result<FileReference, ExportError> {
        let file_name = format!("{}.xml", sha256(logical_id).to_hex());
        let absolute = self.context.category_dir(category).join(&file_name);

        fs::write(&absolute, content).map_err(|e| ExportError::io(&absolute, e))?;
        *self.written.entry(category).or_default() += 1;

        let reference = FileReference {
            path: format!("{}/{}", category.dir_name(), file_name),
            content_hash: sha256(content),
            content_type: content_type.to_string(),
        };
        debug!(logical_id, path = %reference.path, "wrote file");

        Ok(reference)
    }

    /// Number of files written per category.
    pub fn written(&self) -> &BTreeMap<Category, usize> {
        &self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256("abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_category_dir_names() {
        let names: Vec<_> = Category::iter().map(Category::dir_name).collect();
        assert_eq!(names, ["cpu", "cp", "symbols", "sources", "blocks"]);
        for category in Category::iter() {
            assert_eq!(category.dir_name(), category.to_string());
        }
    }

    #[test]
    fn test_prepare_recreates_categories() {
        let temp = TempDir::new().unwrap();
        let context = ExportContext::new(temp.path().join("out"));
        context.prepare().unwrap();

        let stale = context.category_dir(Category::Blocks).join("stale.xml");
        fs::write(&stale, "old").unwrap();
        let keep = context.top_level_file("notes.txt");
        fs::write(&keep, "keep").unwrap();

        context.prepare().unwrap();
        assert!(!stale.exists());
        assert!(keep.exists());
        for category in Category::iter() {
            assert!(context.category_dir(category).is_dir());
        }
    }

    #[test]
    fn test_write_names_by_logical_id() {
        let temp = TempDir::new().unwrap();
        let context = ExportContext::new(temp.path());
        context.prepare().unwrap();
        let mut writer = FileWriter::new(&context);

        let doc = Element::new("S7SymbolTable").attr("Name", "Symbols");
        let reference = writer
            .write(Category::Symbols, "Station/CPU/Symbols", "S7SymbolTable", &doc)
            .unwrap();

        let expected_name = format!("{}.xml", sha256("Station/CPU/Symbols").to_hex());
        assert_eq!(reference.path, format!("symbols/{expected_name}"));
        assert_eq!(reference.content_type, "S7SymbolTable");

        let written = fs::read(temp.path().join(&reference.path)).unwrap();
        assert_eq!(reference.content_hash, sha256(&written));
        assert_eq!(writer.written()[&Category::Symbols], 1);
    }

    #[test]
    fn test_rewrite_keeps_name_changes_hash() {
        let temp = TempDir::new().unwrap();
        let context = ExportContext::new(temp.path());
        context.prepare().unwrap();
        let mut writer = FileWriter::new(&context);

        let first = writer
            .write_text(Category::Blocks, "Blocks/FC1", "S7FunctionBlock", "<a/>")
            .unwrap();
        let second = writer
            .write_text(Category::Blocks, "Blocks/FC1", "S7FunctionBlock", "<b/>")
            .unwrap();

        assert_eq!(first.path, second.path);
        assert_ne!(first.content_hash, second.content_hash);
        let on_disk = fs::read_to_string(temp.path().join(&second.path)).unwrap();
        assert_eq!(on_disk, "<b/>");
    }

    #[test]
    fn test_write_into_missing_category_fails() {
        let temp = TempDir::new().unwrap();
        let context = ExportContext::new(temp.path().join("never-prepared"));
        let mut writer = FileWriter::new(&context);
        let result = writer.write_text(Category::Cp, "x", "SdaTreeTables", "<x/>");
        assert!(matches!(result, Err(ExportError::NotFound { .. })));
    }
}
