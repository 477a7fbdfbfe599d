//! Depth-first walk from the project structure to the item tree.

use tracing::warn;

use plcsnap_core::{ExportError, ExportWarning, Mnemonic, ProjectNode};

use crate::item::{GENERIC_ITEM_TYPE, Item};
use crate::serialize::serialize_node;
use crate::writer::FileWriter;

/// Name of the root item.
pub const ROOT_ITEM_NAME: &str = "Project";

/// Type label of the root item.
pub const ROOT_ITEM_TYPE: &str = "Folder";

/// Walks a project tree, writing content files as it goes.
pub struct TreeWalker<'w, 'c> {
    writer: &'w mut FileWriter<'c>,
    mnemonic: Mnemonic,
    warnings: Vec<ExportWarning>,
}

impl<'w, 'c> TreeWalker<'w, 'c> {
    pub fn new(writer: &'w mut FileWriter<'c>, mnemonic: Mnemonic) -> Self {
        Self {
            writer,
            mnemonic,
            warnings: Vec::new(),
        }
    }

    /// Build the item tree for the children of `root`.
    ///
    /// Master systems are left out together with their subtrees.
    pub fn walk(&mut self, root: &ProjectNode) -> Result<Item, ExportError> {
        let mut item = Item::new(ROOT_ITEM_NAME, ROOT_ITEM_TYPE);
        self.visit_children(&mut item, &root.children)?;
        Ok(item)
    }

    /// Consume the walker, returning the skipped entities.
    pub fn into_warnings(self) -> Vec<ExportWarning> {
        self.warnings
    }

    fn visit_children(&mut self, parent: &mut Item, nodes: &[ProjectNode]) -> Result<(), ExportError> {
        for node in nodes {
            if node.kind.is_master_system() {
                continue;
            }
            let item = self.visit(node)?;
            parent.children.push(item);
        }
        Ok(())
    }

    fn visit(&mut self, node: &ProjectNode) -> Result<Item, ExportError> {
        let mut item = Item::new(node.name.clone(), GENERIC_ITEM_TYPE);
        if node.kind.needs_logical_id() && node.structured_name.is_empty() {
            warn!(
                node = %node.name,
                kind = node.kind.name(),
                "node has no structured name, its files may collide"
            );
        }

        let contribution = serialize_node(self.writer, node, self.mnemonic)?;
        if let Some(file) = contribution.file {
            item.attach(file);
        }
        item.children.extend(contribution.items);
        for warning in contribution.skipped {
            warn!(
                entity = %warning.entity,
                kind = node.kind.name(),
                "{}",
                warning.message
            );
            self.warnings.push(warning);
        }

        self.visit_children(&mut item, &node.children)?;
        Ok(item)
    }
}
