//! Program blocks, symbol tables and sources.

use std::collections::BTreeMap;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Mnemonic convention used when rendering decoded instruction text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mnemonic {
    /// International (SIMATIC English) mnemonics, e.g. `A I 0.0`.
    #[default]
    English,
    /// German mnemonics, e.g. `U E 0.0`.
    German,
}

/// Block type as recorded in the block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockType {
    OB,
    FB,
    FC,
    SFB,
    SFC,
    DB,
    SDB,
    UDT,
    VAT,
}

/// Offline block container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockFolder {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A single program block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub name: CompactString,
    pub block_type: BlockType,
    pub body: BlockBody,
}

impl Block {
    /// Create a new block.
    pub fn new(name: impl Into<CompactString>, block_type: BlockType, body: BlockBody) -> Self {
        Self {
            name: name.into(),
            block_type,
            body,
        }
    }
}

/// Decoded content of a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum BlockBody {
    /// Code block (OB, FB, FC) with networks.
    Logic(LogicBlock),
    /// Data block.
    Data(DataBlock),
    /// Variable (watch) table.
    WatchTable(WatchTable),
    /// Block kind without decoded content (UDT, SDB, ...).
    Other { type_name: String },
    /// Block the loader could not decode.
    Unreadable { reason: String },
}

impl BlockBody {
    /// Type label used for the block's output element and item.
    pub fn type_label(&self) -> &str {
        match self {
            BlockBody::Logic(_) => "S7FunctionBlock",
            BlockBody::Data(_) => "S7DataBlock",
            BlockBody::WatchTable(_) => "S7VATBlock",
            BlockBody::Other { type_name } => type_name,
            BlockBody::Unreadable { .. } => "S7Block",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogicBlock {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Interface declaration (IN, OUT, IN_OUT, STAT, TEMP sections).
    #[serde(default)]
    pub interface: Vec<DataRow>,
    #[serde(default)]
    pub networks: Vec<Network>,
}

/// A code network (rung).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    #[serde(default)]
    pub comment: String,
    /// Decoded instruction text, per mnemonic convention.
    #[serde(default)]
    pub code: BTreeMap<Mnemonic, String>,
}

impl Network {
    /// Instruction text in the given mnemonic convention.
    pub fn code_in(&self, mnemonic: Mnemonic) -> Option<&str> {
        self.code.get(&mnemonic).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataBlock {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub structure: Vec<DataRow>,
}

/// A declaration row; nested for structs and arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataRow {
    pub name: String,
    pub data_type: String,
    /// Type text as shown inside a data block, e.g. `ARRAY [1 .. 8] OF INT`.
    #[serde(default)]
    pub formatted_type: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Byte.bit address within the block.
    pub address: String,
    #[serde(default)]
    pub start_value: Option<String>,
    #[serde(default)]
    pub children: Vec<DataRow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchTable {
    #[serde(default)]
    pub rows: Vec<WatchRow>,
}

/// A row of a watch table. Rows without a value are layout placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchRow {
    #[serde(default)]
    pub value: Option<WatchValue>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub address: String,
}

/// Operand watched by a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchValue {
    pub name: String,
    pub data_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolTable {
    #[serde(default)]
    pub entries: Vec<SymbolEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub symbol: String,
    #[serde(default)]
    pub comment: String,
    pub data_type: String,
    /// Operand in IEC notation, e.g. `%I0.0`.
    pub operand_iec: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceFolder {
    #[serde(default)]
    pub entries: Vec<SourceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    pub name: CompactString,
    pub body: SourceBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum SourceBody {
    /// Text source stored in the project (AWL/SCL/GRAPH export).
    Project { text: String },
    /// Source kind whose text is not exported.
    Other { type_name: String },
    /// Source the loader could not read.
    Unreadable { reason: String },
}

impl SourceBody {
    pub fn type_label(&self) -> &str {
        match self {
            SourceBody::Project { .. } => "S7ProjectSourceInfo",
            SourceBody::Other { type_name } => type_name,
            SourceBody::Unreadable { .. } => "S7SourceInfo",
        }
    }
}
