//! Reading diagnostic text and structured configuration files.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use labyrinth_core::{GridSpec, NavigationConfig};
use serde::de::DeserializeOwned;

/// Read diagnostic text from a file, or from stdin when `path` is `None` or `-`.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read diagnostic text: {:?}", p)),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read diagnostic text from stdin")?;
            Ok(buf)
        }
    }
}

/// Load a JSON or TOML document, chosen by file extension. Anything that is
/// not `.toml` is parsed as JSON.
pub fn load_structured<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            toml::from_str(&content).with_context(|| format!("Invalid TOML in {:?}", path))
        }
        _ => serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {:?}", path)),
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub triage_limit: Option<usize>,
    pub reward_seed: Option<u64>,
}

/// Config file first, then a separate grid file, then flag overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    grid_path: Option<&Path>,
    overrides: &Overrides,
) -> Result<NavigationConfig> {
    let mut config = match config_path {
        Some(path) => load_structured::<NavigationConfig>(path)
            .with_context(|| format!("Failed to load navigation config from {:?}", path))?,
        None => NavigationConfig::default(),
    };

    if let Some(path) = grid_path {
        let grid: GridSpec = load_structured(path)
            .with_context(|| format!("Failed to load grid from {:?}", path))?;
        config.grid = Some(grid);
    }
    if let Some(k) = overrides.triage_limit {
        config.triage_limit = k;
    }
    if let Some(seed) = overrides.reward_seed {
        config.reward_seed = Some(seed);
    }
    Ok(config)
}
