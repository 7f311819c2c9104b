//! Mock package manager for testing.
//!
//! `MockManager` implements the [`PackageManager`] trait against in-memory
//! state and records mutating calls for later assertion. Failures can be
//! injected per package to exercise the pipeline's error isolation.
//!
//! # Example
//!
//! ```
//! use brewman::brew::{MockManager, PackageManager};
//!
//! let manager = MockManager::new()
//!     .with_formulae(vec!["git", "xz"])
//!     .with_dependents("xz", vec!["imagemagick"]);
//!
//! assert!(manager.is_installed("git").unwrap());
//! assert_eq!(manager.reverse_dependents("xz").unwrap(), vec!["imagemagick"]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::{BrewmanError, Result};

use super::PackageManager;

/// In-memory [`PackageManager`] for tests.
#[derive(Debug, Default)]
pub struct MockManager {
    formulae: Vec<String>,
    casks: Vec<String>,
    dependents: HashMap<String, Vec<String>>,
    failing_queries: HashSet<String>,
    failing_uninstalls: HashSet<String>,
    orphan_cleanup_fails: bool,
    uninstalled: RefCell<Vec<String>>,
    orphan_passes: RefCell<usize>,
}

impl MockManager {
    /// Create an empty mock manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the installed formulae.
    pub fn with_formulae(mut self, names: Vec<&str>) -> Self {
        self.formulae = names.into_iter().map(str::to_string).collect();
        self
    }

    /// Set the installed casks.
    pub fn with_casks(mut self, names: Vec<&str>) -> Self {
        self.casks = names.into_iter().map(str::to_string).collect();
        self
    }

    /// Set the reverse dependents of a package.
    pub fn with_dependents(mut self, name: &str, dependents: Vec<&str>) -> Self {
        self.dependents.insert(
            name.to_string(),
            dependents.into_iter().map(str::to_string).collect(),
        );
        self
    }

    /// Make the reverse-dependent query fail for a package.
    pub fn with_failing_query(mut self, name: &str) -> Self {
        self.failing_queries.insert(name.to_string());
        self
    }

    /// Make uninstalling a package fail.
    pub fn with_failing_uninstall(mut self, name: &str) -> Self {
        self.failing_uninstalls.insert(name.to_string());
        self
    }

    /// Make the orphan-cleanup pass fail.
    pub fn with_failing_orphan_cleanup(mut self) -> Self {
        self.orphan_cleanup_fails = true;
        self
    }

    /// Packages uninstalled so far, in call order.
    pub fn uninstalled(&self) -> Vec<String> {
        self.uninstalled.borrow().clone()
    }

    /// Number of orphan-cleanup passes attempted.
    pub fn orphan_passes(&self) -> usize {
        *self.orphan_passes.borrow()
    }
}

impl PackageManager for MockManager {
    fn version(&self) -> Result<String> {
        Ok("Homebrew 4.0.0 (mock)".to_string())
    }

    fn is_installed(&self, name: &str) -> Result<bool> {
        let name = name.to_string();
        let removed = self.uninstalled.borrow().contains(&name);
        Ok(!removed && (self.formulae.contains(&name) || self.casks.contains(&name)))
    }

    fn reverse_dependents(&self, name: &str) -> Result<Vec<String>> {
        if self.failing_queries.contains(name) {
            return Err(BrewmanError::CommandFailed {
                command: format!("brew uses --installed {}", name),
                code: Some(1),
            });
        }
        Ok(self.dependents.get(name).cloned().unwrap_or_default())
    }

    fn uninstall(&self, name: &str) -> Result<()> {
        if self.failing_uninstalls.contains(name) {
            return Err(BrewmanError::CommandFailed {
                command: format!("brew uninstall {}", name),
                code: Some(1),
            });
        }
        self.uninstalled.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn remove_orphans(&self) -> Result<()> {
        *self.orphan_passes.borrow_mut() += 1;
        if self.orphan_cleanup_fails {
            return Err(BrewmanError::CommandFailed {
                command: "brew autoremove".to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }

    fn installed_formulae(&self) -> Result<Vec<String>> {
        let removed = self.uninstalled.borrow();
        Ok(self
            .formulae
            .iter()
            .filter(|f| !removed.contains(*f))
            .cloned()
            .collect())
    }

    fn installed_casks(&self) -> Result<Vec<String>> {
        let removed = self.uninstalled.borrow();
        Ok(self
            .casks
            .iter()
            .filter(|c| !removed.contains(*c))
            .cloned()
            .collect())
    }
}
