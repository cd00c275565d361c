//! Triage and result-bundle types.

use serde::{Deserialize, Serialize};

use crate::domain::error::Result;
use crate::domain::issue::Issue;
use crate::domain::path::PathResult;

/// Lowest reward a boss battle can carry.
pub const MIN_REWARD: u32 = 50;
/// Highest reward a boss battle can carry.
pub const MAX_REWARD: u32 = 150;

/// A high-severity issue queued for dedicated remediation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BossBattle {
    pub issue: Issue,
    /// Always within `MIN_REWARD..=MAX_REWARD`.
    pub reward: u32,
}

/// Everything one navigation request produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationReport {
    pub issues: Vec<Issue>,
    pub path: PathResult,
    pub boss_battles: Vec<BossBattle>,
    pub score: u64,
}

impl NavigationReport {
    /// Pretty-printed JSON, as handed to result consumers.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
