//! A* on random weighted grids agrees with exhaustive relaxation.

use std::collections::HashMap;

use labyrinth_core::{find_path, Coord, GridGraph, NodeKey, PathStatus, Topology};
use proptest::prelude::*;

/// Bellman-Ford style relaxation over every cell until nothing improves.
fn reference_cost(graph: &GridGraph, start: NodeKey, goal: NodeKey) -> Option<u64> {
    let mut dist: HashMap<NodeKey, u64> = HashMap::new();
    dist.insert(start, 0);

    let cells: Vec<NodeKey> = (0..graph.height())
        .flat_map(|y| (0..graph.width()).map(move |x| NodeKey::cell(x, y)))
        .collect();

    loop {
        let mut changed = false;
        for key in &cells {
            let Some(&d) = dist.get(key) else { continue };
            for (next, cost) in graph.neighbors(key) {
                let candidate = d + cost;
                if dist.get(&next).map_or(true, |&known| candidate < known) {
                    dist.insert(next, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist.get(&goal).copied()
}

#[derive(Debug, Clone)]
struct Scenario {
    width: u32,
    height: u32,
    walls: Vec<Coord>,
    weights: Vec<(Coord, u64)>,
    start: Coord,
    goal: Coord,
}

fn scenario() -> impl Strategy<Value = Scenario> {
    (1u32..=6, 1u32..=6).prop_flat_map(|(width, height)| {
        let cells = (width * height) as usize;
        (
            prop::collection::vec(prop::bool::weighted(0.25), cells),
            prop::collection::vec(0u64..=6, cells),
            (0..width, 0..height),
            (0..width, 0..height),
        )
            .prop_map(move |(wall_mask, cell_weights, (sx, sy), (gx, gy))| {
                let start = Coord::new(sx, sy);
                let goal = Coord::new(gx, gy);
                let mut walls = Vec::new();
                let mut weights = Vec::new();
                for (i, (is_wall, weight)) in wall_mask.into_iter().zip(cell_weights).enumerate() {
                    let c = Coord::new(i as u32 % width, i as u32 / width);
                    if is_wall && c != start && c != goal {
                        walls.push(c);
                    } else {
                        weights.push((c, weight));
                    }
                }
                Scenario {
                    width,
                    height,
                    walls,
                    weights,
                    start,
                    goal,
                }
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn astar_cost_matches_reference(s in scenario()) {
        let graph = GridGraph::new(s.width, s.height, s.walls.clone(), s.weights.clone());
        let start = NodeKey::from(s.start);
        let goal = NodeKey::from(s.goal);

        let result = find_path(&graph, start, goal);
        let expected = reference_cost(&graph, start, goal);

        match expected {
            Some(cost) => {
                prop_assert_eq!(result.status, PathStatus::Found);
                prop_assert_eq!(result.total_cost, cost);
            }
            None => {
                prop_assert_eq!(result.status, PathStatus::Unreachable);
                prop_assert!(result.nodes.is_empty());
            }
        }
    }

    #[test]
    fn found_paths_are_walkable(s in scenario()) {
        let graph = GridGraph::new(s.width, s.height, s.walls.clone(), s.weights.clone());
        let result = find_path(&graph, s.start.into(), s.goal.into());
        prop_assume!(result.is_found());

        prop_assert_eq!(result.nodes.first().map(|n| n.id), Some(NodeKey::from(s.start)));
        prop_assert_eq!(result.nodes.last().map(|n| n.id), Some(NodeKey::from(s.goal)));
        prop_assert!(result.nodes.iter().all(|n| n.passable));

        let mut walked = 0u64;
        for pair in result.nodes.windows(2) {
            let step = graph
                .neighbors(&pair[0].id)
                .into_iter()
                .find(|(k, _)| *k == pair[1].id);
            prop_assert!(step.is_some(), "{} is not adjacent to {}", pair[0].id, pair[1].id);
            walked += step.map(|(_, cost)| cost).unwrap_or_default();
        }
        prop_assert_eq!(walked, result.total_cost);
    }

    #[test]
    fn search_is_deterministic(s in scenario()) {
        let graph = GridGraph::new(s.width, s.height, s.walls.clone(), s.weights.clone());
        let first = find_path(&graph, s.start.into(), s.goal.into());
        let second = find_path(&graph, s.start.into(), s.goal.into());
        prop_assert_eq!(first, second);
    }
}
