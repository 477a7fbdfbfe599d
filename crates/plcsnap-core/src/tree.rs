//! Loaded project container and statistics.

use serde::{Deserialize, Serialize};

use crate::block::Mnemonic;
use crate::node::{NodeKind, ProjectNode};

/// Summary statistics for a loaded project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub folders: u64,
    pub stations: u64,
    pub cpus: u64,
    pub cps: u64,
    pub symbol_tables: u64,
    pub block_folders: u64,
    pub blocks: u64,
    pub source_folders: u64,
    pub sources: u64,
    pub master_systems: u64,
    /// Deepest nesting level below the root.
    pub max_depth: u32,
}

impl ProjectStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one node at the given depth.
    pub fn record(&mut self, node: &ProjectNode, depth: u32) {
        self.max_depth = self.max_depth.max(depth);
        match &node.kind {
            NodeKind::Folder => self.folders += 1,
            NodeKind::Station(_) => self.stations += 1,
            NodeKind::Cpu(_) => self.cpus += 1,
            NodeKind::Cp(_) => self.cps += 1,
            NodeKind::SymbolTable(_) => self.symbol_tables += 1,
            NodeKind::Blocks(folder) => {
                self.block_folders += 1;
                self.blocks += folder.blocks.len() as u64;
            }
            NodeKind::Sources(folder) => {
                self.source_folders += 1;
                self.sources += folder.entries.len() as u64;
            }
            NodeKind::MasterSystem => self.master_systems += 1,
        }
    }
}

/// A loaded project: language setting plus structure tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Mnemonic convention used when rendering program code.
    #[serde(default)]
    pub language: Mnemonic,

    /// Root of the project structure; its children are the top-level items.
    pub structure: ProjectNode,
}

impl Project {
    /// Create a new project.
    pub fn new(language: Mnemonic, structure: ProjectNode) -> Self {
        Self {
            language,
            structure,
        }
    }

    /// Top-level station nodes, in project order.
    pub fn stations(&self) -> impl Iterator<Item = &ProjectNode> {
        self.structure
            .children
            .iter()
            .filter(|node| node.kind.is_station())
    }

    /// Compute statistics over all nodes below the root.
    pub fn stats(&self) -> ProjectStats {
        fn visit(node: &ProjectNode, depth: u32, stats: &mut ProjectStats) {
            for child in &node.children {
                stats.record(child, depth);
                visit(child, depth + 1, stats);
            }
        }

        let mut stats = ProjectStats::new();
        visit(&self.structure, 1, &mut stats);
        stats
    }
}
