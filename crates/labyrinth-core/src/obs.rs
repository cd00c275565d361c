//! Structured observability hooks for navigation requests.
//!
//! This module provides:
//! - A request-scoped tracing span via the `NavigationSpan` RAII guard
//! - Emission functions for the request lifecycle: started, finished, rejected
//!
//! Events are emitted at `info!` level; rejected configurations at `warn!`.

use tracing::info;

use crate::domain::path::PathResult;

/// RAII guard that enters a request-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = NavigationSpan::enter("req-42");
/// // every event until the guard drops carries request_id = "req-42"
/// ```
pub struct NavigationSpan {
    _span: tracing::span::EnteredSpan,
}

impl NavigationSpan {
    /// Create and enter a span tagged with the request id.
    pub fn enter(request_id: &str) -> Self {
        let span = tracing::info_span!("labyrinth.navigate", request_id = %request_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: navigation started.
pub fn emit_navigation_started(mode: &str, issues: usize, triage_limit: usize) {
    info!(
        event = "navigation.started",
        mode = %mode,
        issues = issues,
        triage_limit = triage_limit,
    );
}

/// Emit event: navigation finished with the path outcome and score.
pub fn emit_navigation_finished(path: &PathResult, boss_battles: usize, score: u64) {
    info!(
        event = "navigation.finished",
        status = ?path.status,
        total_cost = path.total_cost,
        path_len = path.len(),
        expanded = path.expanded,
        boss_battles = boss_battles,
        score = score,
    );
}

/// Emit event: the request was rejected before searching.
pub fn emit_configuration_rejected(error: &dyn std::fmt::Display) {
    tracing::warn!(event = "navigation.rejected", error = %error);
}
