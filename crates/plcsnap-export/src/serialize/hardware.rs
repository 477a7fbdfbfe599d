//! Station, controller and communication module documents.

use plcsnap_core::{NetworkInterface, Station};

use super::table::TreeTable;
use crate::xml::Element;

/// Content type and root element of interface table documents.
pub const TREE_TABLES: &str = "SdaTreeTables";

/// One `Type, Module` table per master system of the station.
pub fn station_document(station: &Station) -> Element {
    let mut root = Element::new(TREE_TABLES);

    for master_system in &station.master_systems {
        let mut table =
            TreeTable::new(&["Type", "Module"]).title(format!("{} Interfaces", master_system.name));
        for node in &master_system.nodes {
            table.row(vec![
                format!("{} ({})", node.node_type, node.node_id),
                node.name.to_string(),
            ]);
        }
        root.push(table.to_element());
    }

    root
}

/// `Network Interfaces` table, or `None` when the module has no interfaces.
pub fn interface_document(interfaces: &[NetworkInterface]) -> Option<Element> {
    if interfaces.is_empty() {
        return None;
    }

    let mut table = TreeTable::new(&["Name", "Type", "Address"]).title("Network Interfaces");
    for interface in interfaces {
        table.row(vec![
            interface.name.to_string(),
            interface.type_label().to_string(),
            interface.address_label(),
        ]);
    }

    Some(Element::new(TREE_TABLES).child(table.to_element()))
}
