//! Application discovery.

use std::path::{Path, PathBuf};

use crate::brew::{PackageKind, PackageManager};
use crate::error::Result;

use super::matcher::{find_equivalent, names_match};
use super::{AppRecord, ScanResult};

/// A discovered application before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    /// Display name with the platform extension stripped.
    pub name: String,
    /// Filesystem location.
    pub path: PathBuf,
}

/// Scan the system for applications and their Homebrew status.
pub fn scan(manager: &dyn PackageManager) -> Result<ScanResult> {
    let formulae = manager.installed_formulae()?;
    let casks = manager.installed_casks()?;
    let entries = discover_applications();
    Ok(build_records(entries, &formulae, &casks, managed_kind()))
}

/// The package kind that marks an application as managed on this platform.
fn managed_kind() -> PackageKind {
    if cfg!(target_os = "macos") {
        PackageKind::Cask
    } else {
        PackageKind::Formula
    }
}

/// Enumerate applications from the platform's application directories.
fn discover_applications() -> Vec<AppEntry> {
    let (dirs, extension): (Vec<PathBuf>, &str) = if cfg!(target_os = "macos") {
        let mut dirs = vec![
            PathBuf::from("/Applications"),
            PathBuf::from("/System/Applications"),
        ];
        if let Some(home) = dirs::home_dir() {
            dirs.push(home.join("Applications"));
        }
        (dirs, "app")
    } else {
        let mut dirs = vec![PathBuf::from("/usr/share/applications")];
        if let Some(home) = dirs::home_dir() {
            dirs.push(home.join(".local/share/applications"));
        }
        (dirs, "desktop")
    };

    let mut entries = Vec::new();
    for dir in dirs {
        entries.extend(list_apps(&dir, extension));
    }
    entries
}

/// List application entries in one directory, matching an extension.
pub fn list_apps(dir: &Path, extension: &str) -> Vec<AppEntry> {
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut entries: Vec<AppEntry> = read_dir
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            let matches = path
                .extension()
                .map(|e| e.eq_ignore_ascii_case(extension))
                .unwrap_or(false);
            if !matches {
                return None;
            }
            let name = path.file_stem()?.to_string_lossy().to_string();
            Some(AppEntry { name, path })
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Classify discovered entries against the installed package sets.
///
/// `kind` selects which set marks an application as managed: casks on
/// macOS, formulae elsewhere.
pub fn build_records(
    entries: Vec<AppEntry>,
    formulae: &[String],
    casks: &[String],
    kind: PackageKind,
) -> ScanResult {
    let managed_set = match kind {
        PackageKind::Cask => casks,
        PackageKind::Formula => formulae,
    };

    let apps = entries
        .into_iter()
        .map(|entry| {
            let managed = managed_set
                .iter()
                .any(|p| names_match(&entry.name, p))
                .then_some(kind);
            let suggestion = if managed.is_none() {
                find_equivalent(&entry.name, casks, formulae)
            } else {
                None
            };
            AppRecord {
                name: entry.name,
                path: entry.path,
                managed,
                suggestion,
            }
        })
        .collect();

    ScanResult { apps }
}
