//! Search result types.

use serde::{Deserialize, Serialize};

use crate::domain::graph::GraphNode;

/// Outcome of a single search call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    Found,
    Unreachable,
}

/// Minimum-cost route from start to goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathResult {
    /// Start to goal inclusive when `Found`; empty when `Unreachable`.
    pub nodes: Vec<GraphNode>,
    pub total_cost: u64,
    pub status: PathStatus,
    /// Nodes closed during the search.
    #[serde(default)]
    pub expanded: usize,
}

impl PathResult {
    pub fn found(nodes: Vec<GraphNode>, total_cost: u64, expanded: usize) -> Self {
        Self {
            nodes,
            total_cost,
            status: PathStatus::Found,
            expanded,
        }
    }

    pub fn unreachable(expanded: usize) -> Self {
        Self {
            nodes: Vec::new(),
            total_cost: 0,
            status: PathStatus::Unreachable,
            expanded,
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == PathStatus::Found
    }

    /// Number of nodes on the route; 0 when unreachable.
    pub fn len(&self) -> usize {
        match self.status {
            PathStatus::Found => self.nodes.len(),
            PathStatus::Unreachable => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
