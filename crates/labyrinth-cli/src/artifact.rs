//! Persisted navigation results.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use labyrinth_core::NavigationReport;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Bumped whenever a field is renamed or removed.
pub const SCHEMA_VERSION: u32 = 1;

/// One navigation run as written by `labyrinth navigate --output`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationArtifact {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub request_id: String,
    /// SHA-256 of the diagnostic text, hex encoded.
    pub input_sha256: String,
    pub report: NavigationReport,
}

impl NavigationArtifact {
    pub fn new(request_id: impl Into<String>, input: &str, report: NavigationReport) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            request_id: request_id.into(),
            input_sha256: input_digest(input),
            report,
        }
    }
}

pub fn input_digest(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// Write the artifact as pretty JSON, creating parent directories.
pub fn write_artifact(path: &Path, artifact: &NavigationArtifact) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create artifact directory {:?}", parent))?;
    }
    let content = serde_json::to_vec_pretty(artifact).context("serialize navigation artifact")?;
    std::fs::write(path, content).with_context(|| format!("write {:?}", path))?;
    tracing::info!(event = "artifact.written", path = %path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{navigate, NavigationConfig};

    #[test]
    fn test_input_digest_is_sha256_hex() {
        assert_eq!(
            input_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_write_artifact_creates_dirs_and_parses_back() {
        let text = "error: boom";
        let report = navigate(text, &NavigationConfig::default()).unwrap();
        let artifact = NavigationArtifact::new("req-1", text, report);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs").join("nested").join("report.json");
        write_artifact(&path, &artifact).unwrap();

        let raw = std::fs::read(&path).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["request_id"], "req-1");
        assert_eq!(value["input_sha256"], input_digest(text));
        assert_eq!(value["report"]["path"]["status"], "found");

        let back: NavigationArtifact = serde_json::from_slice(&raw).unwrap();
        assert_eq!(back, artifact);
    }
}
