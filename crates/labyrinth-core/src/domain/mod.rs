//! Domain models for the navigation engine.
//!
//! Every entity is owned by the request that created it and is never
//! mutated after construction:
//! - `Issue`: one normalized diagnostic line
//! - `GraphNode` / `NodeKey` / `GridSpec`: traversal graph vocabulary
//! - `PathResult`: outcome of a search
//! - `BossBattle` / `NavigationReport`: triage output and the result bundle

pub mod error;
pub mod graph;
pub mod issue;
pub mod path;
pub mod report;

pub use error::{GridError, NavigatorError, Result};
pub use graph::{CellWeight, Coord, GraphNode, GridSpec, NodeKey};
pub use issue::{Issue, BASELINE_TEXT};
pub use path::{PathResult, PathStatus};
pub use report::{BossBattle, NavigationReport, MAX_REWARD, MIN_REWARD};
