//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/diff-explain/`
//! - macOS: `~/Library/Application Support/diff-explain/`
//! - Windows: `%APPDATA%\diff-explain\`
//!
//! Nothing here creates directories: the pipeline only ever reads config.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "diff-explain";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to app config file inside the config directory
pub fn app_config_path() -> Option<PathBuf> {
    config_dir().ok().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_naming() {
        if let Ok(dir) = config_dir() {
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_app_config_path() {
        if let Some(path) = app_config_path() {
            assert!(path.ends_with("diff-explain/config.toml"));
        }
    }
}
