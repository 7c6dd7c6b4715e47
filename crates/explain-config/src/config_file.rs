//! Config file lookup
//!
//! Locations, first readable one wins:
//! 1. `.diff-explain.toml` in the current working directory
//! 2. `~/.diff-explain.toml`
//! 3. `config.toml` in the platform config directory (see [`crate::paths`])

use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".diff-explain.toml";

/// Candidate config file paths, in lookup order
pub fn config_candidates() -> Vec<PathBuf> {
    let home = std::env::var_os("HOME").map(|home| Path::new(&home).join(CONFIG_FILE));

    std::iter::once(Some(PathBuf::from(CONFIG_FILE)))
        .chain([home, crate::paths::app_config_path()])
        .flatten()
        .collect()
}

/// Content of the first readable candidate, with its path
pub fn read_first(candidates: &[PathBuf]) -> Option<(PathBuf, String)> {
    candidates.iter().find_map(|path| {
        std::fs::read_to_string(path)
            .ok()
            .map(|content| (path.clone(), content))
    })
}

/// Load config file content from the first location that has one
pub fn load_config_file() -> Option<String> {
    let (path, content) = read_first(&config_candidates())?;
    log::debug!("Loaded config from {}", path.display());
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_candidates_order() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
        if let Some(platform) = crate::paths::app_config_path() {
            assert_eq!(candidates.last(), Some(&platform));
        }
        if std::env::var_os("HOME").is_some() {
            assert!(candidates[1].ends_with(CONFIG_FILE));
            assert!(candidates[1].is_absolute());
        }
    }

    #[test]
    fn test_read_first_prefers_earlier_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().join("cwd.toml");
        let home = dir.path().join("home.toml");
        let platform = dir.path().join("platform.toml");
        std::fs::write(&home, "keyed_model = \"home\"").unwrap();
        std::fs::write(&platform, "keyed_model = \"platform\"").unwrap();

        let candidates = vec![cwd.clone(), home.clone(), platform];

        // The working-directory file is missing, so the home file wins
        let (path, content) = read_first(&candidates).unwrap();
        assert_eq!(path, home);
        assert_eq!(content, "keyed_model = \"home\"");

        std::fs::write(&cwd, "keyed_model = \"cwd\"").unwrap();
        let (path, _) = read_first(&candidates).unwrap();
        assert_eq!(path, cwd);
    }

    #[test]
    fn test_read_first_none_found() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_first(&[dir.path().join("missing.toml")]), None);
    }
}
