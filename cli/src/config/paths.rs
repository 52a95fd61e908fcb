//! Platform-specific path utilities for wsctl.

use std::path::PathBuf;

use crate::error::{Result, WsctlError};

/// Get the configuration directory for wsctl.
///
/// - Linux: `~/.config/wsctl`
/// - macOS: `~/Library/Application Support/wsctl`
/// - Windows: `%APPDATA%\wsctl`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| WsctlError::Config("Cannot determine config directory".to_string()))?;
    Ok(base.join("wsctl"))
}

/// Get the main configuration file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
