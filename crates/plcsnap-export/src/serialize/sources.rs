//! Source entry documents.

use plcsnap_core::{ExportError, ExportWarning, SourceBody, SourceEntry, SourceFolder};

use super::{Contribution, SerializeError};
use crate::item::Item;
use crate::writer::{Category, FileWriter};
use crate::xml::Element;

/// Build the content document of one source entry.
///
/// Project sources carry their text twice, matching the layout
/// existing snapshots were produced with.
pub fn source_document(entry: &SourceEntry) -> Result<Element, SerializeError> {
    let type_label = entry.body.type_label();
    let root = Element::new(type_label)
        .attr("Name", entry.name.as_str())
        .attr("Type", type_label);

    match &entry.body {
        SourceBody::Project { text } => Ok(root.text(text.as_str()).text(text.as_str())),
        SourceBody::Other { .. } => Ok(root),
        SourceBody::Unreadable { reason } => Err(SerializeError::Unreadable {
            reason: reason.clone(),
        }),
    }
}

/// Write one file per source entry; unreadable entries are skipped.
pub(super) fn serialize_sources(
    writer: &mut FileWriter<'_>,
    folder_id: &str,
    folder: &SourceFolder,
) -> Result<Contribution, ExportError> {
    let mut contribution = Contribution::default();

    for entry in &folder.entries {
        let document = match source_document(entry) {
            Ok(document) => document,
            Err(e) => {
                contribution
                    .skipped
                    .push(ExportWarning::source_skipped(&entry.name, e));
                continue;
            }
        };

        let type_label = entry.body.type_label();
        let logical_id = format!("{folder_id}/{}", entry.name);
        let file = writer.write(Category::Sources, &logical_id, type_label, &document)?;
        contribution
            .items
            .push(Item::new(entry.name.clone(), type_label).with_file(file));
    }

    Ok(contribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_source_text_embedded_twice() {
        let entry = SourceEntry {
            name: "Motor".into(),
            body: SourceBody::Project {
                text: "FUNCTION FC 1\u{0}".into(),
            },
        };
        let xml = source_document(&entry).unwrap().to_document().unwrap();
        assert_eq!(
            xml,
            "<S7ProjectSourceInfo Name=\"Motor\" Type=\"S7ProjectSourceInfo\">FUNCTION FC 1?FUNCTION FC 1?</S7ProjectSourceInfo>"
        );
    }

    #[test]
    fn test_other_source_has_no_text() {
        let entry = SourceEntry {
            name: "Graph".into(),
            body: SourceBody::Other {
                type_name: "S7GraphSourceInfo".into(),
            },
        };
        let element = source_document(&entry).unwrap();
        assert_eq!(element.name, "S7GraphSourceInfo");
        assert!(element.children.is_empty());
    }

    #[test]
    fn test_unreadable_source_fails() {
        let entry = SourceEntry {
            name: "Broken".into(),
            body: SourceBody::Unreadable {
                reason: "file missing".into(),
            },
        };
        assert!(source_document(&entry).is_err());
    }
}
