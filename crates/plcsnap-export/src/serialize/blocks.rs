//! Program block documents.

use plcsnap_core::{
    Block, BlockBody, BlockFolder, DataBlock, ExportError, ExportWarning, LogicBlock, Mnemonic,
};

use super::rows::{RowOwner, push_data_rows, push_watch_rows};
use super::{Contribution, SerializeError};
use crate::item::Item;
use crate::writer::{Category, FileWriter};
use crate::xml::Element;

/// Build the content document of one block.
///
/// Code is rendered in `mnemonic`, whatever convention the block was saved
/// with.
pub fn block_document(block: &Block, mnemonic: Mnemonic) -> Result<Element, SerializeError> {
    let type_label = block.body.type_label();
    let mut root = Element::new(type_label)
        .attr("Name", block.name.as_str())
        .attr("Type", type_label);

    match &block.body {
        BlockBody::Logic(logic) => push_logic_block(&mut root, logic, mnemonic)?,
        BlockBody::Data(data) => push_data_block(&mut root, data),
        BlockBody::WatchTable(table) => push_watch_rows(&mut root, &table.rows),
        BlockBody::Other { .. } => {}
        BlockBody::Unreadable { reason } => {
            return Err(SerializeError::Unreadable {
                reason: reason.clone(),
            });
        }
    }

    Ok(root)
}

fn push_logic_block(
    root: &mut Element,
    logic: &LogicBlock,
    mnemonic: Mnemonic,
) -> Result<(), SerializeError> {
    if let Some(title) = non_empty(&logic.title) {
        root.set_attr("Title", title);
    }
    if let Some(description) = non_empty(&logic.description) {
        root.set_attr("Description", description);
    }

    let mut interface = Element::new("interface");
    push_data_rows(&mut interface, &logic.interface, RowOwner::LogicBlock);
    root.push(interface);

    let mut networks = Element::new("Networks");
    for network in &logic.networks {
        let code = match network.code_in(mnemonic) {
            Some(code) => code,
            None if network.code.is_empty() => "",
            None => {
                return Err(SerializeError::MissingCode {
                    network: network.name.clone(),
                    mnemonic,
                });
            }
        };

        networks.push(
            Element::new("Network")
                .attr("Title", network.name.as_str())
                .child(Element::with_text("comment", network.comment.as_str()))
                .child(Element::with_text("AWL", code)),
        );
    }
    root.push(networks);

    Ok(())
}

fn push_data_block(root: &mut Element, data: &DataBlock) {
    if let Some(title) = non_empty(&data.title) {
        root.set_attr("Title", title);
    }
    push_data_rows(root, &data.structure, RowOwner::DataBlock);
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Write one file per block; failing blocks are skipped and reported.
pub(super) fn serialize_blocks(
    writer: &mut FileWriter<'_>,
    folder_id: &str,
    folder: &BlockFolder,
    mnemonic: Mnemonic,
) -> Result<Contribution, ExportError> {
    let mut contribution = Contribution::default();

    for block in &folder.blocks {
        let type_label = block.body.type_label();
        let document = match block_document(block, mnemonic) {
            Ok(document) => document,
            Err(e) => {
                contribution.skipped.push(ExportWarning::block_skipped(
                    &block.name,
                    &block.block_type.to_string(),
                    e,
                ));
                continue;
            }
        };

        let logical_id = format!("{folder_id}/{}", block.name);
        let file = writer.write(Category::Blocks, &logical_id, type_label, &document)?;
        contribution
            .items
            .push(Item::new(block.name.clone(), type_label).with_file(file));
    }

    Ok(contribution)
}
