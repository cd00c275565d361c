//! Error taxonomy for the navigation engine.
//!
//! Only caller mistakes are errors. An unreachable goal is a normal
//! [`PathStatus::Unreachable`](crate::domain::PathStatus) value, and empty or
//! malformed diagnostic text degrades to the baseline issue.

use crate::domain::graph::Coord;

/// Reasons a grid specification is rejected by the graph builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("{role} {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        role: &'static str,
        coord: Coord,
        width: u32,
        height: u32,
    },

    #[error("{role} {coord} is a wall")]
    Impassable { role: &'static str, coord: Coord },
}

/// Navigation engine errors.
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    #[error("configuration error: {0}")]
    Configuration(#[from] GridError),

    #[error("navigation task failed: {0}")]
    TaskFailed(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for navigation engine operations.
pub type Result<T> = std::result::Result<T, NavigatorError>;
