//! Interface declaration and watch table rows.

use plcsnap_core::{DataRow, WatchRow};

use crate::xml::Element;

/// Whose declaration a row belongs to; data blocks show their own type text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowOwner {
    LogicBlock,
    DataBlock,
}

/// Append one `variable` element per row, nesting child rows.
pub(crate) fn push_data_rows(parent: &mut Element, rows: &[DataRow], owner: RowOwner) {
    for row in rows {
        let data_type = match (owner, &row.formatted_type) {
            (RowOwner::DataBlock, Some(formatted)) => formatted.as_str(),
            _ => row.data_type.as_str(),
        };

        let mut variable = Element::new("variable")
            .attr("Name", row.name.as_str())
            .child(Element::with_text("dataType", data_type));

        if let Some(comment) = row.comment.as_deref().filter(|c| !c.is_empty()) {
            variable.push(Element::with_text("comment", comment));
        }

        variable.push(Element::with_text("address", row.address.as_str()));

        if let Some(start_value) = &row.start_value {
            variable.push(Element::with_text("initialValue", start_value.as_str()));
        }

        push_data_rows(&mut variable, &row.children, owner);
        parent.push(variable);
    }
}

/// Append one `variable` element per watch row; rows without a value
/// become empty placeholders.
pub(crate) fn push_watch_rows(parent: &mut Element, rows: &[WatchRow]) {
    for row in rows {
        let Some(value) = &row.value else {
            parent.push(Element::new("variable").attr("Name", ""));
            continue;
        };

        let mut variable = Element::new("variable").attr("Name", value.name.as_str());

        if let Some(comment) = row.comment.as_deref().filter(|c| !c.is_empty()) {
            variable.push(Element::with_text("comment", comment));
        }

        variable.push(Element::with_text("dataType", value.data_type.as_str()));
        variable.push(Element::with_text("address", row.address.as_str()));
        parent.push(variable);
    }
}
