//! Content-addressed export of PLC projects into versionable snapshots.
//!
//! An export walks the project tree depth-first and writes one XML file per
//! exportable entity into a category directory (`cpu`, `cp`, `symbols`,
//! `sources`, `blocks`). File names are the SHA-256 of the entity's logical
//! identifier, so an unchanged entity keeps its path between runs. Next to
//! the category directories the exporter writes:
//!
//! - `project_tree.xml`, the item tree referencing every written file
//!   together with the SHA-256 of its content
//! - `devices_connection_information.json`, one descriptor per station
//!
//! # Example
//!
//! ```rust,no_run
//! use plcsnap_core::ExportConfig;
//! use plcsnap_export::Exporter;
//! use plcsnap_load::JsonProjectLoader;
//!
//! let exporter = Exporter::new(ExportConfig::new("snapshot"));
//! let report = exporter
//!     .run(&JsonProjectLoader::new(), "plant.json".as_ref(), None)
//!     .unwrap();
//!
//! println!("{} files, {} warnings", report.total_files(), report.warnings.len());
//! ```

mod exporter;
mod item;
mod manifest;
mod sanitize;
mod serialize;
mod walker;
mod writer;
mod xml;

pub use exporter::{ExportReport, Exporter, RunError};
pub use item::{GENERIC_ITEM_TYPE, Item};
pub use manifest::{DeviceInfo, EthernetCommunication, collect_devices, write_manifest};
pub use sanitize::{PLACEHOLDER, is_xml_char, sanitize};
pub use serialize::{
    SerializeError, TREE_TABLES, TreeTable, block_document, interface_document, source_document,
    station_document, symbol_table_document,
};
pub use walker::{ROOT_ITEM_NAME, ROOT_ITEM_TYPE, TreeWalker};
pub use writer::{
    Category, DEVICE_MANIFEST_FILE, ExportContext, FileReference, FileWriter, PROJECT_TREE_FILE,
    sha256,
};
pub use xml::{Element, Node};
