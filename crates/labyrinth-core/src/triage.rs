//! Triage queue: the top-K most severe issues become boss battles.
//!
//! Ranking is a stable sort on descending severity, so equally severe issues
//! keep extraction order. Rewards come from a [`RewardSource`]; the default
//! maps severity linearly into the reward range and [`SeededRewards`] adds
//! reproducible variation for callers that want it.

use sha2::{Digest, Sha256};

use crate::domain::issue::Issue;
use crate::domain::report::{BossBattle, MAX_REWARD, MIN_REWARD};

/// Default number of boss battles retained.
pub const DEFAULT_TRIAGE_LIMIT: usize = 3;

/// Assigns a reward to a triaged issue.
///
/// Implementations must return a value in `MIN_REWARD..=MAX_REWARD` and must
/// be deterministic for a given issue.
pub trait RewardSource {
    fn reward(&self, issue: &Issue) -> u32;
}

/// `reward = 50 + min(severity, 100)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityRewards;

impl RewardSource for SeverityRewards {
    fn reward(&self, issue: &Issue) -> u32 {
        MIN_REWARD + issue.severity.min(MAX_REWARD - MIN_REWARD)
    }
}

/// Rewards spread over the full range by hashing the seed with the issue.
///
/// The same seed and issue always produce the same reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRewards {
    pub seed: u64,
}

impl SeededRewards {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RewardSource for SeededRewards {
    fn reward(&self, issue: &Issue) -> u32 {
        let mut hasher = Sha256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(issue.id.to_le_bytes());
        hasher.update(issue.text.as_bytes());
        let digest = hasher.finalize();

        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        let span = u64::from(MAX_REWARD - MIN_REWARD + 1);
        MIN_REWARD + (u64::from_le_bytes(head) % span) as u32
    }
}

/// Rank with the default severity-based rewards.
pub fn rank(issues: &[Issue], k: usize) -> Vec<BossBattle> {
    rank_with(issues, k, &SeverityRewards)
}

/// Keep the `k` most severe issues, most severe first.
pub fn rank_with(issues: &[Issue], k: usize, rewards: &dyn RewardSource) -> Vec<BossBattle> {
    let mut ranked: Vec<&Issue> = issues.iter().collect();
    ranked.sort_by(|a, b| b.severity.cmp(&a.severity));

    let battles: Vec<BossBattle> = ranked
        .into_iter()
        .take(k)
        .map(|issue| BossBattle {
            issue: issue.clone(),
            reward: rewards.reward(issue).clamp(MIN_REWARD, MAX_REWARD),
        })
        .collect();

    tracing::debug!(
        event = "triage.ranked",
        candidates = issues.len(),
        limit = k,
        battles = battles.len(),
    );
    battles
}
