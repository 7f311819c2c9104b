//! Configuration schema.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrewmanConfig {
    /// Package group lists used by template generation.
    pub packages: PackageGroups,

    /// Named install-script templates.
    pub templates: BTreeMap<String, TemplateConfig>,

    /// Cleanup settings.
    pub cleanup: CleanupConfig,

    /// Where generated scripts are written. `~` is expanded.
    pub output_dir: Option<PathBuf>,
}

impl Default for BrewmanConfig {
    fn default() -> Self {
        Self {
            packages: PackageGroups::default(),
            templates: default_templates(),
            cleanup: CleanupConfig::default(),
            output_dir: None,
        }
    }
}

impl BrewmanConfig {
    /// Resolve the script output directory, expanding a leading `~`.
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(path) => expand_tilde(path),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Documents")
                .join("brewman-scripts"),
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Package lists grouped by purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageGroups {
    /// Essential CLI tools for all environments.
    pub essential_formulae: Vec<String>,

    /// Development tools.
    pub development_formulae: Vec<String>,

    /// Essential GUI applications.
    pub essential_casks: Vec<String>,

    /// Development GUI applications.
    pub development_casks: Vec<String>,

    /// Productivity applications.
    pub productivity_casks: Vec<String>,
}

impl Default for PackageGroups {
    fn default() -> Self {
        Self {
            essential_formulae: strings(&["git", "curl", "wget", "tree", "htop", "jq"]),
            development_formulae: strings(&["node", "yarn", "cmake"]),
            essential_casks: strings(&["rectangle"]),
            development_casks: strings(&["visual-studio-code", "docker"]),
            productivity_casks: strings(&["alt-tab", "obsidian"]),
        }
    }
}

/// One install-script template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Base name of the generated script (without extension).
    pub script_name: String,

    /// Include the development package groups.
    pub include_development: bool,

    /// Include the productivity cask group.
    pub include_productivity: bool,

    /// Extra formulae appended after the groups.
    pub custom_formulae: Vec<String>,

    /// Extra casks appended after the groups.
    pub custom_casks: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            script_name: "setup".to_string(),
            include_development: false,
            include_productivity: false,
            custom_formulae: Vec::new(),
            custom_casks: Vec::new(),
        }
    }
}

/// Cleanup settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanupConfig {
    /// Default candidate packages when none are given on the command line.
    pub candidates: Vec<String>,
}

fn default_templates() -> BTreeMap<String, TemplateConfig> {
    let mut templates = BTreeMap::new();
    templates.insert(
        "minimal".to_string(),
        TemplateConfig {
            script_name: "minimal-setup".to_string(),
            ..TemplateConfig::default()
        },
    );
    templates.insert(
        "development".to_string(),
        TemplateConfig {
            script_name: "dev-setup".to_string(),
            include_development: true,
            ..TemplateConfig::default()
        },
    );
    templates.insert(
        "full".to_string(),
        TemplateConfig {
            script_name: "full-setup".to_string(),
            include_development: true,
            include_productivity: true,
            ..TemplateConfig::default()
        },
    );
    templates
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
