//! Project tree nodes.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::block::{BlockFolder, SourceFolder, SymbolTable};
use crate::hardware::{CommModule, CpuModule, Station};

/// Type of project node and its kind-specific attributes.
#[derive(Debug, Clone, Default, IntoStaticStr, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum NodeKind {
    /// Plain grouping folder.
    #[default]
    Folder,
    /// Station configuration.
    Station(Station),
    /// Programmable controller.
    Cpu(CpuModule),
    /// Communication module.
    Cp(CommModule),
    /// Symbol table.
    SymbolTable(SymbolTable),
    /// Offline block container.
    Blocks(BlockFolder),
    /// Source container.
    Sources(SourceFolder),
    /// Bus grouping; surfaced only through its station.
    MasterSystem,
}

impl NodeKind {
    /// Short kind name, e.g. `station` or `master-system`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Check if this is a master system.
    pub fn is_master_system(&self) -> bool {
        matches!(self, NodeKind::MasterSystem)
    }

    /// Check if this is a station.
    pub fn is_station(&self) -> bool {
        matches!(self, NodeKind::Station(_))
    }

    /// Whether the exporter names files after this node's structured name.
    pub fn needs_logical_id(&self) -> bool {
        !matches!(self, NodeKind::Folder | NodeKind::MasterSystem)
    }
}

/// A node of the project structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectNode {
    /// Display name.
    pub name: CompactString,

    /// Stable structured folder name, e.g. `SIMATIC 300(1)/CPU 315-2 DP`.
    /// Used as the logical identifier for file naming.
    #[serde(default)]
    pub structured_name: String,

    /// Node type and associated attributes.
    #[serde(default)]
    pub kind: NodeKind,

    /// Children in project order.
    #[serde(default)]
    pub children: Vec<ProjectNode>,
}

impl ProjectNode {
    /// Create a new node without children.
    pub fn new(
        name: impl Into<CompactString>,
        structured_name: impl Into<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            name: name.into(),
            structured_name: structured_name.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Create a plain folder.
    pub fn folder(name: impl Into<CompactString>, structured_name: impl Into<String>) -> Self {
        Self::new(name, structured_name, NodeKind::Folder)
    }

    /// Append a child and return self.
    pub fn with_child(mut self, child: ProjectNode) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child holding a controller.
    pub fn first_cpu(&self) -> Option<(&ProjectNode, &CpuModule)> {
        self.children.iter().find_map(|c| match &c.kind {
            NodeKind::Cpu(cpu) => Some((c, cpu)),
            _ => None,
        })
    }

    /// First direct child holding a communication module.
    pub fn first_cp(&self) -> Option<(&ProjectNode, &CommModule)> {
        self.children.iter().find_map(|c| match &c.kind {
            NodeKind::Cp(cp) => Some((c, cp)),
            _ => None,
        })
    }

    /// Depth-first, pre-order iterator over this node and its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
