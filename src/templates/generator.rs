//! Template resolution and script rendering.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{BrewmanConfig, TemplateConfig};
use crate::error::{BrewmanError, Result};

/// Packages selected by a template, duplicates removed, order stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSet {
    /// Formulae to install.
    pub formulae: Vec<String>,
    /// Casks to install.
    pub casks: Vec<String>,
}

impl PackageSet {
    /// Total number of packages.
    pub fn len(&self) -> usize {
        self.formulae.len() + self.casks.len()
    }

    /// Whether the set contains no packages.
    pub fn is_empty(&self) -> bool {
        self.formulae.is_empty() && self.casks.is_empty()
    }
}

/// Resolve the package set for a named template.
///
/// Essential groups are always included; development and productivity
/// groups by template flag; custom packages last. The first occurrence of
/// a name wins.
pub fn resolve_packages(config: &BrewmanConfig, name: &str) -> Result<PackageSet> {
    let template = config
        .templates
        .get(name)
        .ok_or_else(|| BrewmanError::UnknownTemplate {
            name: name.to_string(),
        })?;

    let groups = &config.packages;

    let mut formulae = Vec::new();
    push_unique(&mut formulae, &groups.essential_formulae);
    if template.include_development {
        push_unique(&mut formulae, &groups.development_formulae);
    }
    push_unique(&mut formulae, &template.custom_formulae);

    let mut casks = Vec::new();
    push_unique(&mut casks, &groups.essential_casks);
    if template.include_development {
        push_unique(&mut casks, &groups.development_casks);
    }
    if template.include_productivity {
        push_unique(&mut casks, &groups.productivity_casks);
    }
    push_unique(&mut casks, &template.custom_casks);

    Ok(PackageSet { formulae, casks })
}

fn push_unique(target: &mut Vec<String>, source: &[String]) {
    for name in source {
        if !target.iter().any(|existing| existing == name) {
            target.push(name.clone());
        }
    }
}

/// Render the install script for a template.
pub fn render_script(template_name: &str, template: &TemplateConfig, set: &PackageSet) -> String {
    let mut script = String::new();
    script.push_str("#!/bin/sh\n");
    script.push_str(&format!(
        "# {} - Homebrew install script (template: {})\n",
        template.script_name, template_name
    ));
    script.push_str(&format!(
        "# Generated by brewman on {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    script.push_str("\nset -e\n\n");
    script.push_str("if ! command -v brew >/dev/null 2>&1; then\n");
    script.push_str("  echo \"Homebrew is required: https://brew.sh\" >&2\n");
    script.push_str("  exit 1\n");
    script.push_str("fi\n");

    if !set.formulae.is_empty() {
        script.push_str("\necho \"Installing formulae...\"\n");
        for formula in &set.formulae {
            script.push_str(&format!("brew install {}\n", formula));
        }
    }

    if !set.casks.is_empty() {
        script.push_str("\necho \"Installing casks...\"\n");
        for cask in &set.casks {
            script.push_str(&format!("brew install --cask {}\n", cask));
        }
    }

    script.push_str("\necho \"Done.\"\n");
    script
}

/// Generate a template's script and write it to disk.
///
/// Writes to `output` when given, otherwise to the configured output
/// directory as `<script_name>.sh`. Parent directories are created.
pub fn write_script(
    config: &BrewmanConfig,
    name: &str,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let set = resolve_packages(config, name)?;
    let template = &config.templates[name];
    let script = render_script(name, template, &set);

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => config
            .resolved_output_dir()
            .join(format!("{}.sh", template.script_name)),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, script)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }

    tracing::info!("generated {}", path.display());
    Ok(path)
}

/// Generate scripts for every configured template.
pub fn generate_all(config: &BrewmanConfig) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for name in config.templates.keys() {
        paths.push(write_script(config, name, None)?);
    }
    Ok(paths)
}
