//! Configuration loading for GridDebug
//!
//! Settings are read from `.griddebug/config.toml` in the working directory,
//! falling back to `<user config dir>/griddebug/config.toml`, falling back
//! to defaults. A malformed file is logged and ignored rather than aborting
//! startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use griddebug_core::prelude::*;
use griddebug_core::Pipeline;

const CONFIG_FILENAME: &str = "config.toml";
const GRIDDEBUG_DIR: &str = ".griddebug";

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub backend: BackendSettings,
    pub ui: UiSettings,
}

/// Analysis backend connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Base URL of the GridDebugAgent API
    pub url: String,

    /// Per-request timeout in milliseconds; "no resolution within T" is
    /// treated as a rejection at the client boundary
    pub timeout_ms: u64,

    /// Pipeline pre-selected at startup
    pub pipeline: Pipeline,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000/".to_string(),
            timeout_ms: 30_000,
            pipeline: Pipeline::Baseline,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Use unicode icons in headers and badges
    pub icons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { icons: true }
    }
}

/// Load settings for the given working directory.
pub fn load_settings(working_dir: &Path) -> Settings {
    for path in candidate_paths(working_dir) {
        match read_settings(&path) {
            Ok(Some(settings)) => {
                info!("Loaded settings from {}", path.display());
                return settings;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Ignoring malformed config {}: {}", path.display(), e);
            }
        }
    }
    Settings::default()
}

fn candidate_paths(working_dir: &Path) -> Vec<PathBuf> {
    let mut paths = vec![working_dir.join(GRIDDEBUG_DIR).join(CONFIG_FILENAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("griddebug").join(CONFIG_FILENAME));
    }
    paths
}

fn read_settings(path: &Path) -> Result<Option<Settings>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let settings =
        toml::from_str(&content).map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
    Ok(Some(settings))
}
