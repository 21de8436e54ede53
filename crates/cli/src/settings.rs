use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults;

/// Settings read from an optional JSON file. Missing fields fall back to
/// `defaults`, and command-line flags override both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding unpacked genetic maps
    pub cache_dir: PathBuf,
    /// Species used when a command does not name one
    pub species: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(defaults::CACHE_DIR),
            species: defaults::SPECIES.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or use the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }
}
