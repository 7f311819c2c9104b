//! Installed-application scanning.
//!
//! Walks the platform's application directories, marks which entries are
//! already Homebrew-managed, and suggests Homebrew equivalents for the
//! rest. Results live in memory; `--export` writes a JSON document.

pub mod apps;
pub mod export;
pub mod matcher;

pub use apps::{build_records, list_apps, scan, AppEntry};
pub use export::{to_json, write_export};
pub use matcher::{find_equivalent, names_match, normalize};

use std::path::PathBuf;

use crate::brew::PackageKind;

/// One scanned application.
#[derive(Debug, Clone)]
pub struct AppRecord {
    /// Display name (extension stripped).
    pub name: String,

    /// Filesystem location.
    pub path: PathBuf,

    /// `Some(kind)` when Homebrew manages this application.
    pub managed: Option<PackageKind>,

    /// Closest Homebrew package for an unmanaged application.
    pub suggestion: Option<String>,
}

/// Result of a system scan.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// All scanned applications, in discovery order.
    pub apps: Vec<AppRecord>,
}

impl ScanResult {
    /// Applications Homebrew already manages.
    pub fn managed(&self) -> Vec<&AppRecord> {
        self.apps.iter().filter(|a| a.managed.is_some()).collect()
    }

    /// Applications outside Homebrew.
    pub fn unmanaged(&self) -> Vec<&AppRecord> {
        self.apps.iter().filter(|a| a.managed.is_none()).collect()
    }

    /// Unmanaged applications with a Homebrew equivalent.
    pub fn with_suggestions(&self) -> Vec<&AppRecord> {
        self.apps
            .iter()
            .filter(|a| a.managed.is_none() && a.suggestion.is_some())
            .collect()
    }
}
