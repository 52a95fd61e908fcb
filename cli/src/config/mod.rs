//! Configuration management for wsctl.

pub mod paths;
pub mod settings;

pub use paths::config_file;
pub use settings::{env, ApiConfig, ConsoleConfig, WsctlConfig};

use std::path::Path;

use crate::error::Result;

/// Load configuration from the default config file.
///
/// If the config file doesn't exist, returns default configuration.
pub fn load_config() -> Result<WsctlConfig> {
    let path = config_file()?;
    load_config_from(&path)
}

/// Load configuration from a specific path.
///
/// If the file doesn't exist, returns default configuration.
pub fn load_config_from(path: &Path) -> Result<WsctlConfig> {
    if !path.exists() {
        tracing::debug!("no config file at {}, using defaults", path.display());
        return Ok(WsctlConfig::default().with_env_overrides());
    }

    let contents = std::fs::read_to_string(path)?;
    let config: WsctlConfig = toml::from_str(&contents)?;

    Ok(config.with_env_overrides())
}
