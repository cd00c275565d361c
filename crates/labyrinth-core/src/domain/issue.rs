//! Normalized diagnostic issue.

use serde::{Deserialize, Serialize};

/// Text of the sentinel issue produced for empty input.
pub const BASELINE_TEXT: &str = "baseline";

/// A single normalized diagnostic record, one per input line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Issue {
    /// Stable id in assignment order, starting at 1.
    pub id: u32,

    /// Trimmed line text.
    pub text: String,

    /// Severity estimate derived from `text`.
    pub severity: u32,

    /// Location or producer hint (e.g. `src/main.rs:42` or `SampleError`).
    pub source_hint: Option<String>,
}

impl Issue {
    pub fn new(id: u32, text: impl Into<String>, severity: u32) -> Self {
        Self {
            id,
            text: text.into(),
            severity,
            source_hint: None,
        }
    }

    /// Set the source hint.
    pub fn with_source_hint(mut self, hint: impl Into<String>) -> Self {
        self.source_hint = Some(hint.into());
        self
    }

    /// True for the sentinel issue emitted when no diagnostics were found.
    pub fn is_baseline(&self) -> bool {
        self.id == 1 && self.text == BASELINE_TEXT
    }
}
