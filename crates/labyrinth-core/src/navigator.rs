//! One navigation request, end to end.
//!
//! ```text
//! raw text ──> extract ──> build_graph ──┬──> find_path ──┐
//!                                        └──> rank ───────┴──> score ──> NavigationReport
//! ```
//!
//! Everything here is synchronous and owns its data. Async hosts should call
//! [`navigate_blocking_task`], which moves the whole request onto tokio's
//! blocking pool instead of threading `await` points through the search.

use serde::{Deserialize, Serialize};

use crate::builder::build_graph;
use crate::domain::error::{NavigatorError, Result};
use crate::domain::graph::GridSpec;
use crate::domain::report::NavigationReport;
use crate::extractor::{extract_with, ExtractOptions};
use crate::obs::{
    emit_configuration_rejected, emit_navigation_finished, emit_navigation_started,
    NavigationSpan,
};
use crate::reward::score;
use crate::search::find_path;
use crate::triage::{rank_with, RewardSource, SeededRewards, SeverityRewards, DEFAULT_TRIAGE_LIMIT};

/// Explicit per-request configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Maximum number of boss battles.
    pub triage_limit: usize,

    /// Grid to search; `None` selects issue-chain mode.
    pub grid: Option<GridSpec>,

    /// Seed for [`SeededRewards`]; `None` uses severity-based rewards.
    pub reward_seed: Option<u64>,

    /// Collapse identical diagnostic lines before building the graph.
    pub collapse_duplicates: bool,

    /// Cap on extracted issues.
    pub max_issues: Option<usize>,

    /// Label carried by the request's tracing span.
    pub request_id: Option<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            triage_limit: DEFAULT_TRIAGE_LIMIT,
            grid: None,
            reward_seed: None,
            collapse_duplicates: false,
            max_issues: None,
            request_id: None,
        }
    }
}

impl NavigationConfig {
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_triage_limit(mut self, k: usize) -> Self {
        self.triage_limit = k;
        self
    }

    pub fn with_reward_seed(mut self, seed: u64) -> Self {
        self.reward_seed = Some(seed);
        self
    }

    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            collapse_duplicates: self.collapse_duplicates,
            max_issues: self.max_issues,
        }
    }

    fn reward_source(&self) -> Box<dyn RewardSource> {
        match self.reward_seed {
            Some(seed) => Box::new(SeededRewards::new(seed)),
            None => Box::new(SeverityRewards),
        }
    }
}

/// Run one navigation request.
///
/// Fails only when the grid specification is invalid. An unreachable goal is
/// reported through the path status.
pub fn navigate(text: &str, config: &NavigationConfig) -> Result<NavigationReport> {
    let _span = NavigationSpan::enter(config.request_id.as_deref().unwrap_or("local"));

    let issues = extract_with(text, &config.extract_options());
    let built = match build_graph(&issues, config.grid.as_ref()) {
        Ok(built) => built,
        Err(err) => {
            emit_configuration_rejected(&err);
            return Err(err);
        }
    };
    emit_navigation_started(built.graph.mode().as_str(), issues.len(), config.triage_limit);

    let path = find_path(&built.graph, built.start, built.goal);
    let boss_battles = rank_with(&issues, config.triage_limit, config.reward_source().as_ref());
    let score = score(&path, &boss_battles);

    emit_navigation_finished(&path, boss_battles.len(), score);
    Ok(NavigationReport {
        issues,
        path,
        boss_battles,
        score,
    })
}

/// Run [`navigate`] on tokio's blocking pool.
pub async fn navigate_blocking_task(
    text: String,
    config: NavigationConfig,
) -> Result<NavigationReport> {
    tokio::task::spawn_blocking(move || navigate(&text, &config))
        .await
        .map_err(|e| NavigatorError::TaskFailed(e.to_string()))?
}
