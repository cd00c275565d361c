//! Traversal graph topologies.
//!
//! Two shapes are supported:
//! - [`GridGraph`]: cells of a bounded rectangle, four-way adjacency, walls
//!   are impassable and stepping onto a cell costs that cell's weight.
//! - [`ChainGraph`]: issues in extraction order, each linked to the next at
//!   the destination's severity, the last one linked to a synthetic terminal
//!   at zero cost.
//!
//! The search engine only sees the [`Topology`] trait, so any finite graph
//! with non-negative edge costs can be searched.

use std::collections::{HashMap, HashSet};

use crate::domain::graph::{Coord, GraphNode, NodeKey};
use crate::domain::issue::Issue;

/// Read-only view of a finite graph with non-negative edge costs.
pub trait Topology {
    /// Node data, or `None` if `key` is not part of the graph.
    fn node(&self, key: &NodeKey) -> Option<GraphNode>;

    /// Passable neighbours of `key` with the cost of moving to each, in a
    /// fixed order.
    fn neighbors(&self, key: &NodeKey) -> Vec<(NodeKey, u64)>;

    /// Lower bound on the cost from `from` to `goal`. Must be admissible and
    /// consistent. Zero is always valid.
    fn heuristic(&self, _from: &NodeKey, _goal: &NodeKey) -> u64 {
        0
    }

    /// True for bookkeeping nodes that are searched through but left out of
    /// reported paths.
    fn is_synthetic(&self, _key: &NodeKey) -> bool {
        false
    }
}

/// Graph shape, as reported in logs and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphMode {
    Grid,
    IssueChain,
}

impl GraphMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphMode::Grid => "grid",
            GraphMode::IssueChain => "issue_chain",
        }
    }
}

/// East, south, west, north. Fixed so that discovery order is reproducible.
const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Weight of a cell with no override.
pub const DEFAULT_CELL_WEIGHT: u64 = 1;

/// Bounded rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    width: u32,
    height: u32,
    walls: HashSet<Coord>,
    weights: HashMap<Coord, u64>,
    /// Cheapest passable cell; scales the Manhattan heuristic.
    min_weight: u64,
}

impl GridGraph {
    /// Build a grid. Walls and weights outside the bounds are ignored here;
    /// the builder rejects them before calling this.
    pub fn new(
        width: u32,
        height: u32,
        walls: impl IntoIterator<Item = Coord>,
        weights: impl IntoIterator<Item = (Coord, u64)>,
    ) -> Self {
        let walls: HashSet<Coord> = walls
            .into_iter()
            .filter(|c| c.x < width && c.y < height)
            .collect();
        let weights: HashMap<Coord, u64> = weights
            .into_iter()
            .filter(|(c, _)| c.x < width && c.y < height && !walls.contains(c))
            .collect();

        let passable_cells = u64::from(width) * u64::from(height) - walls.len() as u64;
        let default_cells = passable_cells - weights.len() as u64;
        let min_override = weights.values().copied().min();
        let min_weight = match (default_cells > 0, min_override) {
            (true, Some(w)) => w.min(DEFAULT_CELL_WEIGHT),
            (true, None) => DEFAULT_CELL_WEIGHT,
            (false, Some(w)) => w,
            (false, None) => 0,
        };

        Self {
            width,
            height,
            walls,
            weights,
            min_weight,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, c: &Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    pub fn is_wall(&self, c: &Coord) -> bool {
        self.walls.contains(c)
    }

    pub fn is_passable(&self, c: &Coord) -> bool {
        self.in_bounds(c) && !self.is_wall(c)
    }

    pub fn weight(&self, c: &Coord) -> u64 {
        self.weights.get(c).copied().unwrap_or(DEFAULT_CELL_WEIGHT)
    }

    pub fn min_weight(&self) -> u64 {
        self.min_weight
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn step(&self, c: Coord, (dx, dy): (i64, i64)) -> Option<Coord> {
        let x = i64::from(c.x) + dx;
        let y = i64::from(c.y) + dy;
        if x < 0 || y < 0 {
            return None;
        }
        let next = Coord::new(u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        self.is_passable(&next).then_some(next)
    }
}

impl Topology for GridGraph {
    fn node(&self, key: &NodeKey) -> Option<GraphNode> {
        let c = key.coord()?;
        if !self.in_bounds(&c) {
            return None;
        }
        let passable = !self.is_wall(&c);
        Some(GraphNode::new(*key, passable, self.weight(&c)))
    }

    fn neighbors(&self, key: &NodeKey) -> Vec<(NodeKey, u64)> {
        let Some(c) = key.coord().filter(|c| self.is_passable(c)) else {
            return Vec::new();
        };
        DIRECTIONS
            .iter()
            .filter_map(|d| self.step(c, *d))
            .map(|n| (NodeKey::from(n), self.weight(&n)))
            .collect()
    }

    fn heuristic(&self, from: &NodeKey, goal: &NodeKey) -> u64 {
        match (from.coord(), goal.coord()) {
            (Some(a), Some(b)) => a.manhattan(&b).saturating_mul(self.min_weight),
            _ => 0,
        }
    }
}

/// Issues linked in extraction order, closed by a synthetic terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainGraph {
    /// Issue nodes in chain order; weight is the issue severity.
    nodes: Vec<GraphNode>,
    positions: HashMap<u32, usize>,
}

impl ChainGraph {
    pub fn new(issues: &[Issue]) -> Self {
        let nodes: Vec<GraphNode> = issues
            .iter()
            .map(|i| GraphNode::new(NodeKey::issue(i.id), true, u64::from(i.severity)))
            .collect();
        let positions = issues
            .iter()
            .enumerate()
            .map(|(pos, i)| (i.id, pos))
            .collect();
        Self { nodes, positions }
    }

    /// First issue node, if any.
    pub fn head(&self) -> Option<NodeKey> {
        self.nodes.first().map(|n| n.id)
    }

    /// Issue nodes, not counting the terminal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Topology for ChainGraph {
    fn node(&self, key: &NodeKey) -> Option<GraphNode> {
        match key {
            NodeKey::Issue { id } => self.positions.get(id).map(|&pos| self.nodes[pos]),
            NodeKey::Terminal => Some(GraphNode::new(NodeKey::Terminal, true, 0)),
            NodeKey::Cell { .. } => None,
        }
    }

    fn neighbors(&self, key: &NodeKey) -> Vec<(NodeKey, u64)> {
        let NodeKey::Issue { id } = key else {
            return Vec::new();
        };
        match self.positions.get(id) {
            Some(&pos) => match self.nodes.get(pos + 1) {
                Some(next) => vec![(next.id, next.weight)],
                None => vec![(NodeKey::Terminal, 0)],
            },
            None => Vec::new(),
        }
    }

    fn is_synthetic(&self, key: &NodeKey) -> bool {
        key.is_terminal()
    }
}

/// The graph a navigation request searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalGraph {
    Grid(GridGraph),
    Chain(ChainGraph),
}

impl TraversalGraph {
    pub fn mode(&self) -> GraphMode {
        match self {
            TraversalGraph::Grid(_) => GraphMode::Grid,
            TraversalGraph::Chain(_) => GraphMode::IssueChain,
        }
    }

    /// Number of nodes, including walls and the chain terminal.
    pub fn node_count(&self) -> usize {
        match self {
            TraversalGraph::Grid(g) => g.cell_count(),
            TraversalGraph::Chain(c) => c.len() + 1,
        }
    }
}

impl Topology for TraversalGraph {
    fn node(&self, key: &NodeKey) -> Option<GraphNode> {
        match self {
            TraversalGraph::Grid(g) => g.node(key),
            TraversalGraph::Chain(c) => c.node(key),
        }
    }

    fn neighbors(&self, key: &NodeKey) -> Vec<(NodeKey, u64)> {
        match self {
            TraversalGraph::Grid(g) => g.neighbors(key),
            TraversalGraph::Chain(c) => c.neighbors(key),
        }
    }

    fn heuristic(&self, from: &NodeKey, goal: &NodeKey) -> u64 {
        match self {
            TraversalGraph::Grid(g) => g.heuristic(from, goal),
            TraversalGraph::Chain(c) => c.heuristic(from, goal),
        }
    }

    fn is_synthetic(&self, key: &NodeKey) -> bool {
        match self {
            TraversalGraph::Grid(g) => g.is_synthetic(key),
            TraversalGraph::Chain(c) => c.is_synthetic(key),
        }
    }
}
