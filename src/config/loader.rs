//! Configuration discovery and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BrewmanError, Result};

use super::schema::BrewmanConfig;

/// A loaded configuration and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed (or default) configuration.
    pub config: BrewmanConfig,

    /// Source file, `None` when built-in defaults were used.
    pub path: Option<PathBuf>,
}

/// The default config location: `~/.config/brewman/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?
        .join(".config")
        .join("brewman")
        .join("config.yml");
    Some(path)
}

/// Load configuration.
///
/// An explicit path must exist; the default path is optional and falls
/// back to built-in defaults when absent.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(BrewmanError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return parse_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => parse_file(&path),
        _ => Ok(LoadedConfig {
            config: BrewmanConfig::default(),
            path: None,
        }),
    }
}

fn parse_file(path: &Path) -> Result<LoadedConfig> {
    let contents = fs::read_to_string(path)?;
    let config: BrewmanConfig =
        serde_yaml::from_str(&contents).map_err(|e| BrewmanError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!("loaded config from {}", path.display());
    Ok(LoadedConfig {
        config,
        path: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_missing_path_is_config_not_found() {
        let err = load(Some(Path::new("/nonexistent/config.yml"))).unwrap_err();
        assert!(matches!(err, BrewmanError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_path_is_parsed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "cleanup:\n  candidates: [jq]\n").unwrap();

        let loaded = load(Some(&path)).unwrap();

        assert_eq!(loaded.config.cleanup.candidates, vec!["jq"]);
        assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "cleanup: [not: a: mapping\n").unwrap();

        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, BrewmanError::ConfigParseError { .. }));
    }

    #[test]
    fn default_path_lives_under_dot_config() {
        if let Some(path) = default_config_path() {
            let display = path.to_string_lossy().to_string();
            assert!(display.contains(".config"));
            assert!(display.ends_with("config.yml"));
        }
    }
}
