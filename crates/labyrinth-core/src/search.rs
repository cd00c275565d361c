//! A* search over any [`Topology`].
//!
//! The open set is a binary heap ordered by `(f, h, discovery)`: lowest
//! `f = g + h` first, then the candidate closer to the goal, then the node
//! discovered earliest. A node keeps its first discovery number when it is
//! re-queued with a better `g`, so identical input always expands in the same
//! order and yields the same path.
//!
//! The goal is accepted only when popped. Each node is closed at most once,
//! so the loop ends after at most one expansion per node. With a zero
//! heuristic this is Dijkstra's algorithm.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::domain::graph::{GraphNode, NodeKey};
use crate::domain::path::PathResult;
use crate::graph::Topology;

#[derive(Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u64,
    h: u64,
    discovery: u64,
    g: u64,
    key: NodeKey,
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap on (f, h, discovery)
        (other.f, other.h, other.discovery).cmp(&(self.f, self.h, self.discovery))
    }
}

fn is_passable<T: Topology + ?Sized>(graph: &T, key: &NodeKey) -> bool {
    graph.node(key).is_some_and(|n| n.passable)
}

/// Minimum-cost path from `start` to `goal`.
///
/// Returns [`PathStatus::Unreachable`](crate::domain::PathStatus) with no
/// nodes when the goal cannot be reached, including when either endpoint is
/// missing from the graph or impassable.
pub fn find_path<T: Topology + ?Sized>(graph: &T, start: NodeKey, goal: NodeKey) -> PathResult {
    if !is_passable(graph, &start) || !is_passable(graph, &goal) {
        tracing::debug!(event = "search.invalid_endpoint", start = %start, goal = %goal);
        return PathResult::unreachable(0);
    }

    let mut open = BinaryHeap::new();
    let mut closed: HashSet<NodeKey> = HashSet::new();
    let mut g_score: HashMap<NodeKey, u64> = HashMap::new();
    let mut came_from: HashMap<NodeKey, NodeKey> = HashMap::new();
    let mut discovered: HashMap<NodeKey, u64> = HashMap::new();

    let h0 = graph.heuristic(&start, &goal);
    g_score.insert(start, 0);
    discovered.insert(start, 0);
    open.push(OpenEntry {
        f: h0,
        h: h0,
        discovery: 0,
        g: 0,
        key: start,
    });

    while let Some(current) = open.pop() {
        if !closed.insert(current.key) {
            continue;
        }

        if current.key == goal {
            let path = reconstruct(graph, &came_from, goal);
            tracing::debug!(
                event = "search.found",
                cost = current.g,
                nodes = path.len(),
                expanded = closed.len(),
            );
            return PathResult::found(path, current.g, closed.len());
        }

        for (next, cost) in graph.neighbors(&current.key) {
            if closed.contains(&next) || !is_passable(graph, &next) {
                continue;
            }
            let tentative = current.g.saturating_add(cost);
            if g_score.get(&next).is_some_and(|&known| known <= tentative) {
                continue;
            }
            g_score.insert(next, tentative);
            came_from.insert(next, current.key);

            let next_discovery = discovered.len() as u64;
            let discovery = *discovered.entry(next).or_insert(next_discovery);
            let h = graph.heuristic(&next, &goal);
            open.push(OpenEntry {
                f: tentative.saturating_add(h),
                h,
                discovery,
                g: tentative,
                key: next,
            });
        }
    }

    tracing::debug!(event = "search.unreachable", expanded = closed.len());
    PathResult::unreachable(closed.len())
}

fn reconstruct<T: Topology + ?Sized>(
    graph: &T,
    came_from: &HashMap<NodeKey, NodeKey>,
    goal: NodeKey,
) -> Vec<GraphNode> {
    let mut keys = vec![goal];
    let mut cursor = goal;
    while let Some(&prev) = came_from.get(&cursor) {
        keys.push(prev);
        cursor = prev;
    }
    keys.reverse();
    keys.into_iter()
        .filter(|k| !graph.is_synthetic(k))
        .filter_map(|k| graph.node(&k))
        .collect()
}
