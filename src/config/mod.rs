//! Configuration module
//!
//! Resolves the store path and limits. An optional `~/.task-planner.toml`
//! overrides the defaults; its absence is not an error.

mod types;

pub use types::{Config, Display, Limits};

use crate::error::{Result, TaskError};
use std::fs;
use std::path::Path;

/// File name of the optional config file, relative to the home directory
const CONFIG_FILE_NAME: &str = ".task-planner.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        TaskError::Config(format!("Cannot read config from '{}': {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| TaskError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Resolve the effective configuration.
///
/// Loads `<home>/.task-planner.toml` when it exists, otherwise uses defaults
/// rooted at the home directory.
pub fn resolve() -> Result<Config> {
    let home = dirs::home_dir()
        .ok_or_else(|| TaskError::Config("Cannot determine home directory".to_string()))?;

    let config_path = home.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        load(&config_path)
    } else {
        Ok(Config::with_home(&home))
    }
}
