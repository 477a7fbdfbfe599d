//! Output item tree and the `project_tree.xml` index.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use plcsnap_core::ExportError;

use crate::writer::FileReference;
use crate::xml::Element;

/// Type label of items without a serializer contribution.
pub const GENERIC_ITEM_TYPE: &str = "item";

/// A node of the exported item tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: CompactString,
    pub item_type: String,
    pub file: Option<FileReference>,
    pub children: Vec<Item>,
}

impl Item {
    /// Create a childless, fileless item.
    pub fn new(name: impl Into<CompactString>, item_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_type: item_type.into(),
            file: None,
            children: Vec::new(),
        }
    }

    /// Attach a file; the item takes the file's content type as its type.
    pub fn attach(&mut self, file: FileReference) {
        self.item_type = file.content_type.clone();
        self.file = Some(file);
    }

    /// Builder form of [`Item::attach`].
    pub fn with_file(mut self, file: FileReference) -> Self {
        self.attach(file);
        self
    }

    /// Total number of items in this subtree, including self.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Item::count).sum::<usize>()
    }

    /// Depth-first, pre-order iterator over this item and its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let item = stack.pop()?;
            stack.extend(item.children.iter().rev());
            Some(item)
        })
    }

    /// Convert into an XML element with the given element name.
    fn to_element(&self, element_name: &str) -> Element {
        let mut element = Element::new(element_name)
            .attr("Name", self.name.as_str())
            .attr("Type", self.item_type.as_str());

        if let Some(file) = &self.file {
            element.push(
                Element::with_text("File", file.path.as_str())
                    .attr("DiffHash", file.content_hash.to_hex())
                    .attr("ContentType", file.content_type.as_str()),
            );
        }
        for child in &self.children {
            element.push(child.to_element("Item"));
        }

        element
    }

    /// Render this item as the root of `project_tree.xml`.
    pub fn to_project_tree(&self) -> Result<String, ExportError> {
        self.to_element("ProjectItem").to_standalone_document()
    }
}
