//! Labyrinth Core Library
//!
//! Turns diagnostic text into a weighted traversal graph, routes through it
//! with A*, and triages the most severe issues into boss battles.
//!
//! ## Architecture
//!
//! ```text
//! raw text
//!     │
//!     ├──> extractor   one Issue per non-blank line, severity from keywords
//!     │
//!     ├──> builder     grid (walls, weights) or issue chain ──> TraversalGraph
//!     │
//!     ├──> search      A* with (f, h, discovery) tie-break ──> PathResult
//!     ├──> triage      top-K by severity ──> BossBattle[]
//!     │
//!     └──> reward      10 × path length + Σ rewards
//! ```
//!
//! All of it is pure and synchronous; [`navigate`] wires one request together.

pub mod builder;
pub mod domain;
pub mod extractor;
pub mod graph;
pub mod navigator;
pub mod obs;
pub mod reporting;
pub mod reward;
pub mod search;
pub mod telemetry;
pub mod triage;

pub use builder::{build_graph, validate_grid, BuiltGraph};
pub use domain::{
    BossBattle, CellWeight, Coord, GraphNode, GridError, GridSpec, Issue, NavigationReport,
    NavigatorError, NodeKey, PathResult, PathStatus, Result, BASELINE_TEXT, MAX_REWARD,
    MIN_REWARD,
};
pub use extractor::{extract, extract_with, infer_source_hint, severity_of, ExtractOptions};
pub use graph::{ChainGraph, GraphMode, GridGraph, Topology, TraversalGraph};
pub use navigator::{navigate, navigate_blocking_task, NavigationConfig};
pub use obs::{
    emit_configuration_rejected, emit_navigation_finished, emit_navigation_started,
    NavigationSpan,
};
pub use reporting::{describe_node, describe_path, render_quests, render_report_md};
pub use reward::{score, POINTS_PER_STEP};
pub use search::find_path;
pub use telemetry::init_tracing;
pub use triage::{
    rank, rank_with, RewardSource, SeededRewards, SeverityRewards, DEFAULT_TRIAGE_LIMIT,
};

/// Labyrinth version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
