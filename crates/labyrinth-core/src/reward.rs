//! Reward calculator.

use crate::domain::path::PathResult;
use crate::domain::report::BossBattle;

/// Points per node on the route.
pub const POINTS_PER_STEP: u64 = 10;

/// `10 × path length + Σ boss-battle rewards`. An unreachable path has
/// length 0.
pub fn score(path: &PathResult, boss_battles: &[BossBattle]) -> u64 {
    let route = POINTS_PER_STEP * path.len() as u64;
    let bosses: u64 = boss_battles.iter().map(|b| u64::from(b.reward)).sum();
    route + bosses
}
