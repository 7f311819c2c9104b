//! Dependency-safe package removal.
//!
//! The cleanup pipeline runs strictly sequentially:
//!
//! 1. [`candidates::collect`] — filter the candidate list to installed
//!    packages and query reverse dependents for each (the inventory
//!    collector and dependency checker)
//! 2. [`classifier::classify`] — partition into safe-to-remove and
//!    kept-as-dependency
//! 3. user confirmation (handled by the CLI layer, default "no")
//! 4. [`remover::execute`] — attempt each safe removal independently,
//!    then one orphan-cleanup pass
//! 5. [`report::render`] — summarize removed / kept / failed
//!
//! Nothing is cached between runs; every invocation re-queries the
//! package manager so results reflect current system state.

pub mod candidates;
pub mod classifier;
pub mod remover;
pub mod report;

pub use candidates::collect;
pub use classifier::{classify, Classification};
pub use remover::{execute, OrphanCleanup};

use crate::brew::Snapshot;

/// A candidate package examined during a run.
///
/// Created transiently per run from package-manager queries; never
/// persisted.
#[derive(Debug, Clone)]
pub struct PackageRecord {
    /// Package name, opaque within the manager's namespace.
    pub name: String,

    /// Installed packages that require this one, in query order.
    pub dependents: Vec<String>,

    /// The dependents query failed; the package is kept conservatively.
    pub dependents_unknown: bool,

    /// Classification, computed once at collection time.
    pub classification: Classification,
}

/// Result of scanning and classifying the candidate list.
#[derive(Debug, Clone, Default)]
pub struct CleanupPlan {
    /// Records for installed candidates, in candidate-list order.
    pub records: Vec<PackageRecord>,

    /// Candidates that were not installed and were excluded upstream.
    pub not_installed: Vec<String>,
}

impl CleanupPlan {
    /// Records classified safe to remove.
    pub fn safe(&self) -> Vec<&PackageRecord> {
        self.records
            .iter()
            .filter(|r| r.classification == Classification::SafeToRemove)
            .collect()
    }

    /// Records kept because something depends on them (or the query failed).
    pub fn kept(&self) -> Vec<&PackageRecord> {
        self.records
            .iter()
            .filter(|r| r.classification == Classification::KeptAsDependency)
            .collect()
    }

    /// Total candidates scanned, including those not installed.
    pub fn scanned(&self) -> usize {
        self.records.len() + self.not_installed.len()
    }

    /// Whether there is anything to remove.
    pub fn has_removals(&self) -> bool {
        !self.safe().is_empty()
    }
}

/// Aggregate outcome of the removal phase, held in memory for reporting.
///
/// A package appears in at most one of `removed`, `failed`, and `kept`.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Total candidates scanned.
    pub scanned: usize,

    /// Packages removed successfully, in attempt order.
    pub removed: Vec<String>,

    /// Packages whose removal failed, with the error message.
    pub failed: Vec<(String, String)>,

    /// Packages kept as dependencies, with their reverse dependents.
    pub kept: Vec<PackageRecord>,

    /// Outcome of the final orphan-cleanup pass.
    pub orphan_cleanup: OrphanCleanup,

    /// Remaining package counts after the run, if the query succeeded.
    pub snapshot: Option<Snapshot>,
}

impl RunReport {
    /// Names of packages whose removal failed.
    pub fn failed_names(&self) -> Vec<&str> {
        self.failed.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Names of packages kept as dependencies.
    pub fn kept_names(&self) -> Vec<&str> {
        self.kept.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Terminal state of a cleanup run.
#[derive(Debug)]
pub enum CleanupOutcome {
    /// The operator declined the confirmation prompt; nothing was removed.
    Cancelled,
    /// The removal phase ran to completion.
    Completed(RunReport),
}
