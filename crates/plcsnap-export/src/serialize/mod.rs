//! Per-kind serializers turning project nodes into content documents.
//!
//! Each serializer returns a [`Contribution`] for the walker: an optional
//! file attached to the node's own item, extra child items (one per block or
//! source entry), and the entities that had to be skipped. Only I/O and
//! rendering failures are returned as errors.

mod blocks;
mod hardware;
mod rows;
mod sources;
mod symbols;
mod table;

use thiserror::Error;

use plcsnap_core::{ExportError, ExportWarning, Mnemonic, NodeKind, ProjectNode};

use crate::item::Item;
use crate::writer::{Category, FileReference, FileWriter};

pub use blocks::block_document;
pub use hardware::{interface_document, station_document, TREE_TABLES};
pub use sources::source_document;
pub use symbols::symbol_table_document;
pub use table::TreeTable;

/// Why a single entity could not be serialized.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The loader could not decode the entity.
    #[error("{reason}")]
    Unreadable { reason: String },

    /// A network has decoded code, but not in the requested mnemonic.
    #[error("network {network} has no code in {mnemonic} mnemonics")]
    MissingCode { network: String, mnemonic: Mnemonic },
}

/// What a serializer adds to the item of the node it was given.
#[derive(Debug, Default)]
pub struct Contribution {
    /// File attached to the node's item.
    pub file: Option<FileReference>,
    /// Items appended to the node's item before its own children.
    pub items: Vec<Item>,
    /// Entities left out of the output.
    pub skipped: Vec<ExportWarning>,
}

impl Contribution {
    fn file(file: FileReference) -> Self {
        Self {
            file: Some(file),
            ..Self::default()
        }
    }
}

/// Serialize one node according to its kind.
///
/// Folders and master systems contribute nothing.
pub fn serialize_node(
    writer: &mut FileWriter<'_>,
    node: &ProjectNode,
    mnemonic: Mnemonic,
) -> Result<Contribution, ExportError> {
    let logical_id = node.structured_name.as_str();

    match &node.kind {
        NodeKind::Folder | NodeKind::MasterSystem => Ok(Contribution::default()),
        NodeKind::Station(station) => {
            let document = station_document(station);
            let file = writer.write(Category::Cpu, logical_id, TREE_TABLES, &document)?;
            Ok(Contribution::file(file))
        }
        NodeKind::Cpu(cpu) => match interface_document(&cpu.network_interfaces) {
            Some(document) => {
                let file = writer.write(Category::Cpu, logical_id, TREE_TABLES, &document)?;
                Ok(Contribution::file(file))
            }
            None => Ok(Contribution::default()),
        },
        NodeKind::Cp(cp) => match interface_document(&cp.network_interfaces) {
            Some(document) => {
                let file = writer.write(Category::Cp, logical_id, TREE_TABLES, &document)?;
                Ok(Contribution::file(file))
            }
            None => Ok(Contribution::default()),
        },
        NodeKind::SymbolTable(table) => {
            let document = symbol_table_document(&node.name, table);
            let file = writer.write(Category::Symbols, logical_id, symbols::SYMBOL_TABLE_TYPE, &document)?;
            Ok(Contribution::file(file))
        }
        NodeKind::Blocks(folder) => blocks::serialize_blocks(writer, logical_id, folder, mnemonic),
        NodeKind::Sources(folder) => sources::serialize_sources(writer, logical_id, folder),
    }
}
