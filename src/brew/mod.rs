//! Homebrew adapter.
//!
//! This module provides:
//! - [`PackageManager`] trait abstracting the operations the rest of the
//!   application needs from Homebrew
//! - [`BrewCli`] shelling out to the `brew` binary
//! - [`MockManager`] for tests
//!
//! Keeping the seam at a trait means the cleanup pipeline never knows
//! whether it is talking to a real Homebrew installation or a scripted
//! test double.

pub mod client;
pub mod mock;

pub use client::BrewCli;
pub use mock::MockManager;

use crate::error::Result;

/// Kind of package unit Homebrew manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// Command-line package.
    Formula,
    /// GUI-application package (macOS only).
    Cask,
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formula => write!(f, "formula"),
            Self::Cask => write!(f, "cask"),
        }
    }
}

/// Operations the application needs from the package manager.
///
/// All queries reflect current system state; nothing is cached between
/// calls. Implementations perform one external invocation per method.
pub trait PackageManager {
    /// Probe availability. Returns the manager's version string.
    ///
    /// Failure here means the manager cannot be queried at all, which is
    /// the one fatal condition for a cleanup run.
    fn version(&self) -> Result<String>;

    /// Whether a package is currently installed (formula or cask).
    fn is_installed(&self, name: &str) -> Result<bool>;

    /// Installed packages that declare a dependency on `name`.
    ///
    /// Empty if nothing depends on it. Only ever called for installed
    /// packages.
    fn reverse_dependents(&self, name: &str) -> Result<Vec<String>>;

    /// Uninstall a single package.
    fn uninstall(&self, name: &str) -> Result<()>;

    /// Remove dependencies no longer required by anything (best-effort).
    fn remove_orphans(&self) -> Result<()>;

    /// All installed formulae.
    fn installed_formulae(&self) -> Result<Vec<String>>;

    /// All installed casks. Empty where casks are unsupported.
    fn installed_casks(&self) -> Result<Vec<String>>;
}

/// Counts of remaining managed packages, shown in the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Number of installed formulae.
    pub formulae: usize,
    /// Number of installed casks.
    pub casks: usize,
}

/// Take a snapshot of the manager's current package counts.
pub fn snapshot(manager: &dyn PackageManager) -> Result<Snapshot> {
    Ok(Snapshot {
        formulae: manager.installed_formulae()?.len(),
        casks: manager.installed_casks()?.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_kind_displays_lowercase() {
        assert_eq!(PackageKind::Formula.to_string(), "formula");
        assert_eq!(PackageKind::Cask.to_string(), "cask");
    }

    #[test]
    fn snapshot_counts_both_kinds() {
        let manager = MockManager::new()
            .with_formulae(vec!["git", "jq"])
            .with_casks(vec!["rectangle"]);
        let snap = snapshot(&manager).unwrap();
        assert_eq!(snap.formulae, 2);
        assert_eq!(snap.casks, 1);
    }
}
