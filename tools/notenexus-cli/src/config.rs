use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notes_common::types::ProgressSettings;
use serde::{Deserialize, Serialize};

/// On-disk configuration. Every field is optional; missing values fall back
/// to the site defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub progress: ProgressSettings,
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("notenexus");
    p.push("config.toml");
    Some(p)
}

/// Read `path`, or the default location when `None`. A missing file is not
/// an error; a malformed one is.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                tracing::debug!("No config directory, using defaults");
                return Ok(Config::default());
            }
        },
    };
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn to_toml(config: &Config) -> Result<String> {
    Ok(toml::to_string(config)?)
}
