//! Graph vocabulary shared by the builder, the search and the reports.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer cell coordinate. `x` grows rightwards, `y` grows downwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(&self, other: &Coord) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Opaque node key. Which variants appear depends on the graph mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKey {
    /// Grid cell.
    Cell { x: u32, y: u32 },
    /// Issue node in chain mode, keyed by issue id.
    Issue { id: u32 },
    /// Synthetic goal that closes an issue chain.
    Terminal,
}

impl NodeKey {
    pub const fn cell(x: u32, y: u32) -> Self {
        NodeKey::Cell { x, y }
    }

    pub const fn issue(id: u32) -> Self {
        NodeKey::Issue { id }
    }

    /// The grid coordinate, if this is a cell.
    pub fn coord(&self) -> Option<Coord> {
        match *self {
            NodeKey::Cell { x, y } => Some(Coord::new(x, y)),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeKey::Terminal)
    }
}

impl From<Coord> for NodeKey {
    fn from(c: Coord) -> Self {
        NodeKey::cell(c.x, c.y)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Cell { x, y } => write!(f, "({},{})", x, y),
            NodeKey::Issue { id } => write!(f, "issue-{}", id),
            NodeKey::Terminal => f.write_str("terminal"),
        }
    }
}

/// A node of the traversal graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GraphNode {
    pub id: NodeKey,
    pub passable: bool,
    /// Cost of stepping onto this node.
    pub weight: u64,
}

impl GraphNode {
    pub fn new(id: NodeKey, passable: bool, weight: u64) -> Self {
        Self {
            id,
            passable,
            weight,
        }
    }
}

/// Per-cell weight override supplied by the input provider
/// (occupancy, complexity score, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellWeight {
    pub cell: Coord,
    pub weight: u64,
}

/// Grid specification supplied alongside the diagnostic text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub walls: Vec<Coord>,
    pub start: Coord,
    pub goal: Coord,
    /// Cells not listed here weigh 1.
    #[serde(default)]
    pub weights: Vec<CellWeight>,
}

impl GridSpec {
    /// Open grid with unit weights.
    pub fn new(width: u32, height: u32, start: Coord, goal: Coord) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
            start,
            goal,
            weights: Vec::new(),
        }
    }

    /// Add walls.
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Coord>) -> Self {
        self.walls.extend(walls);
        self
    }

    /// Override the weight of one cell.
    pub fn with_weight(mut self, cell: Coord, weight: u64) -> Self {
        self.weights.push(CellWeight { cell, weight });
        self
    }

    pub fn contains(&self, c: &Coord) -> bool {
        c.x < self.width && c.y < self.height
    }
}
