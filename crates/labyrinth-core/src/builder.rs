//! Graph builder: issues plus an optional grid specification into a
//! [`TraversalGraph`] with designated start and goal.
//!
//! Grid specifications come from the caller and are validated up front;
//! anything out of bounds or a walled start/goal is a configuration error,
//! never silently corrected. Issue-chain mode cannot fail.

use std::collections::HashSet;

use crate::domain::error::{GridError, Result};
use crate::domain::graph::{Coord, GridSpec, NodeKey};
use crate::domain::issue::Issue;
use crate::extractor;
use crate::graph::{ChainGraph, GridGraph, TraversalGraph};

/// A graph ready to be searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltGraph {
    pub graph: TraversalGraph,
    pub start: NodeKey,
    pub goal: NodeKey,
}

/// Build the traversal graph for one request.
///
/// With a grid specification the issues do not shape the graph. Without one
/// the issues are chained in extraction order and the goal is the synthetic
/// terminal after the last issue.
pub fn build_graph(issues: &[Issue], grid: Option<&GridSpec>) -> Result<BuiltGraph> {
    let built = match grid {
        Some(spec) => build_grid(spec)?,
        None => build_chain(issues),
    };
    tracing::debug!(
        event = "graph.built",
        mode = built.graph.mode().as_str(),
        nodes = built.graph.node_count(),
        start = %built.start,
        goal = %built.goal,
    );
    Ok(built)
}

fn build_chain(issues: &[Issue]) -> BuiltGraph {
    // The extractor never returns an empty list, but direct callers might.
    let chain = if issues.is_empty() {
        ChainGraph::new(&extractor::extract(""))
    } else {
        ChainGraph::new(issues)
    };
    let start = chain.head().unwrap_or(NodeKey::Terminal);
    BuiltGraph {
        graph: TraversalGraph::Chain(chain),
        start,
        goal: NodeKey::Terminal,
    }
}

fn build_grid(spec: &GridSpec) -> Result<BuiltGraph> {
    validate_grid(spec)?;
    let grid = GridGraph::new(
        spec.width,
        spec.height,
        spec.walls.iter().copied(),
        spec.weights.iter().map(|w| (w.cell, w.weight)),
    );
    Ok(BuiltGraph {
        graph: TraversalGraph::Grid(grid),
        start: spec.start.into(),
        goal: spec.goal.into(),
    })
}

/// Check a grid specification without building it.
pub fn validate_grid(spec: &GridSpec) -> std::result::Result<(), GridError> {
    if spec.width == 0 || spec.height == 0 {
        return Err(GridError::EmptyGrid {
            width: spec.width,
            height: spec.height,
        });
    }

    let in_bounds = |role: &'static str, coord: Coord| {
        if spec.contains(&coord) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                role,
                coord,
                width: spec.width,
                height: spec.height,
            })
        }
    };

    in_bounds("start", spec.start)?;
    in_bounds("goal", spec.goal)?;
    for wall in &spec.walls {
        in_bounds("wall", *wall)?;
    }
    for w in &spec.weights {
        in_bounds("weighted cell", w.cell)?;
    }

    let walls: HashSet<&Coord> = spec.walls.iter().collect();
    if walls.contains(&spec.start) {
        return Err(GridError::Impassable {
            role: "start",
            coord: spec.start,
        });
    }
    if walls.contains(&spec.goal) {
        return Err(GridError::Impassable {
            role: "goal",
            coord: spec.goal,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::NavigatorError;
    use crate::graph::{GraphMode, Topology};

    fn c(x: u32, y: u32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_chain_mode_starts_at_first_issue() {
        let issues = extractor::extract("a\nb\nc");
        let built = build_graph(&issues, None).expect("chain never fails");
        assert_eq!(built.graph.mode(), GraphMode::IssueChain);
        assert_eq!(built.start, NodeKey::issue(1));
        assert_eq!(built.goal, NodeKey::Terminal);
    }

    #[test]
    fn test_chain_mode_with_no_issues_uses_baseline() {
        let built = build_graph(&[], None).expect("chain never fails");
        assert_eq!(built.start, NodeKey::issue(1));
        assert_eq!(built.graph.node_count(), 2);
    }

    #[test]
    fn test_grid_mode_ignores_issues() {
        let spec = GridSpec::new(3, 2, c(0, 0), c(2, 1));
        let built = build_graph(&extractor::extract("x"), Some(&spec)).expect("valid grid");
        assert_eq!(built.graph.mode(), GraphMode::Grid);
        assert_eq!(built.start, NodeKey::cell(0, 0));
        assert_eq!(built.goal, NodeKey::cell(2, 1));
        assert!(built.graph.node(&NodeKey::issue(1)).is_none());
    }

    #[test]
    fn test_start_out_of_bounds_is_configuration_error() {
        let spec = GridSpec::new(5, 3, c(5, 0), c(4, 2));
        let err = build_graph(&[], Some(&spec)).unwrap_err();
        assert!(matches!(
            err,
            NavigatorError::Configuration(GridError::OutOfBounds { role: "start", .. })
        ));
    }

    #[test]
    fn test_walled_goal_is_configuration_error() {
        let spec = GridSpec::new(5, 3, c(0, 0), c(4, 2)).with_walls([c(4, 2)]);
        let err = build_graph(&[], Some(&spec)).unwrap_err();
        assert!(matches!(
            err,
            NavigatorError::Configuration(GridError::Impassable { role: "goal", .. })
        ));
    }

    #[test]
    fn test_walled_start_is_configuration_error() {
        let spec = GridSpec::new(2, 2, c(0, 0), c(1, 1)).with_walls([c(0, 0)]);
        assert_eq!(
            validate_grid(&spec),
            Err(GridError::Impassable {
                role: "start",
                coord: c(0, 0)
            })
        );
    }

    #[test]
    fn test_zero_sized_grid_rejected() {
        let spec = GridSpec::new(0, 3, c(0, 0), c(0, 0));
        assert!(matches!(
            validate_grid(&spec),
            Err(GridError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_wall_and_weight_rejected() {
        let wall = GridSpec::new(2, 2, c(0, 0), c(1, 1)).with_walls([c(2, 2)]);
        assert!(matches!(
            validate_grid(&wall),
            Err(GridError::OutOfBounds { role: "wall", .. })
        ));

        let weight = GridSpec::new(2, 2, c(0, 0), c(1, 1)).with_weight(c(0, 9), 4);
        assert!(matches!(
            validate_grid(&weight),
            Err(GridError::OutOfBounds {
                role: "weighted cell",
                ..
            })
        ));
    }
}
