//! Core types for plcsnap.
//!
//! This crate provides the project model consumed by the exporter (nodes,
//! hardware, blocks, symbols, sources), the digest type used for content
//! addressing, configuration, and the shared error and warning types.

mod block;
mod config;
mod error;
mod hardware;
mod hash;
mod node;
mod tree;

pub use block::{
    Block, BlockBody, BlockFolder, BlockType, DataBlock, DataRow, LogicBlock, Mnemonic, Network,
    SourceBody, SourceEntry, SourceFolder, SymbolEntry, SymbolTable, WatchRow, WatchTable,
    WatchValue,
};
pub use config::{ExportConfig, ExportConfigBuilder};
pub use error::{ExportError, ExportWarning, WarningKind};
pub use hardware::{
    CommModule, CpuModule, InterfaceConfig, MacAddress, MasterSystem, MasterSystemNode,
    NetworkInterface, Station, StationType,
};
pub use hash::ContentHash;
pub use node::{NodeKind, ProjectNode};
pub use tree::{Project, ProjectStats};
