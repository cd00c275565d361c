//! Issue extractor: raw diagnostic text into ordered [`Issue`] records.
//!
//! Each non-blank, trimmed line becomes one issue. No log format is parsed;
//! a line is a symbolic token whose severity comes from [`severity_of`].
//! Extraction never fails: empty input yields the baseline sentinel so that
//! downstream graph building always has at least one node.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::issue::{Issue, BASELINE_TEXT};

/// Options for [`extract_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Keep only the first occurrence of identical trimmed lines.
    pub collapse_duplicates: bool,

    /// Truncate to this many issues.
    pub max_issues: Option<usize>,
}

/// Longest text prefix (in chars) that still raises severity.
const LENGTH_CAP: usize = 40;

/// Keyword classes, highest first. The first class with a matching keyword wins.
const KEYWORD_CLASSES: &[(&[&str], u32)] = &[
    (&["panic", "fatal", "critical"], 80),
    (&["error", "fail"], 50),
    (&["warn"], 25),
];

/// Base severity when no keyword matches.
const DEFAULT_BASE: u32 = 10;

/// Severity of a diagnostic line.
///
/// `keyword_base + min(char_count, 40) / 4`, where `keyword_base` is 80 for
/// panic/fatal/critical, 50 for error/fail, 25 for warn and 10 otherwise
/// (case-insensitive). The result always lies in `10..=90`.
pub fn severity_of(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let base = KEYWORD_CLASSES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, base)| *base)
        .unwrap_or(DEFAULT_BASE);
    let length_bonus = text.chars().count().min(LENGTH_CAP) / 4;
    base + length_bonus as u32
}

fn location_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"([\w./\\-]+\.[A-Za-z0-9]+):(\d+)(?::\d+)?").ok())
        .as_ref()
}

fn producer_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*):").ok())
        .as_ref()
}

/// Infer where a diagnostic came from.
///
/// Prefers a `path:line` location anywhere in the text, then a leading
/// identifier followed by `:` (e.g. `SampleError: ...`).
pub fn infer_source_hint(text: &str) -> Option<String> {
    if let Some(m) = location_pattern().and_then(|re| re.find(text)) {
        return Some(m.as_str().to_string());
    }
    producer_pattern()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn issue_for(id: u32, line: &str) -> Issue {
    let issue = Issue::new(id, line, severity_of(line));
    match infer_source_hint(line) {
        Some(hint) => issue.with_source_hint(hint),
        None => issue,
    }
}

fn baseline() -> Issue {
    issue_for(1, BASELINE_TEXT)
}

/// Extract issues with default options.
pub fn extract(text: &str) -> Vec<Issue> {
    extract_with(text, &ExtractOptions::default())
}

/// Extract issues, one per non-blank trimmed line, ids `1..=N` in file order.
pub fn extract_with(text: &str, options: &ExtractOptions) -> Vec<Issue> {
    let mut seen = HashSet::new();
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !options.collapse_duplicates || seen.insert(*line));

    let limit = options.max_issues.unwrap_or(usize::MAX);
    let issues: Vec<Issue> = lines
        .take(limit)
        .enumerate()
        .map(|(idx, line)| issue_for(idx as u32 + 1, line))
        .collect();

    if issues.is_empty() {
        tracing::debug!(event = "extract.baseline", "no diagnostics found, using baseline issue");
        return vec![baseline()];
    }

    tracing::debug!(event = "extract.done", issues = issues.len());
    issues
}
