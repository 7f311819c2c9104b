//! Package removal.
//!
//! Each safe package is removed independently; one failure never aborts
//! the attempts that follow. Once removal begins, the run always proceeds
//! to reporting.

use crate::brew::{snapshot, PackageManager};

use super::{CleanupPlan, RunReport};

/// Outcome of the trailing orphan-cleanup pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrphanCleanup {
    /// `brew autoremove` succeeded.
    Completed,
    /// The pass failed; removals already performed still count.
    Failed(String),
}

/// Execute the removal phase for a classified plan.
///
/// Only call after the operator has confirmed. Attempts each safe package
/// in candidate order, recording success or failure per package, then
/// runs one manager-wide orphan-cleanup pass and takes a final snapshot
/// of remaining package counts. Both trailing steps are best-effort.
pub fn execute(manager: &dyn PackageManager, plan: &CleanupPlan) -> RunReport {
    let mut removed = Vec::new();
    let mut failed = Vec::new();

    for record in plan.safe() {
        match manager.uninstall(&record.name) {
            Ok(()) => {
                tracing::info!("removed {}", record.name);
                removed.push(record.name.clone());
            }
            Err(e) => {
                tracing::warn!("failed to remove {}: {}", record.name, e);
                failed.push((record.name.clone(), e.to_string()));
            }
        }
    }

    let orphan_cleanup = match manager.remove_orphans() {
        Ok(()) => OrphanCleanup::Completed,
        Err(e) => {
            tracing::warn!("orphan cleanup failed: {}", e);
            OrphanCleanup::Failed(e.to_string())
        }
    };

    let snapshot = match snapshot(manager) {
        Ok(snap) => Some(snap),
        Err(e) => {
            tracing::warn!("could not snapshot remaining packages: {}", e);
            None
        }
    };

    RunReport {
        scanned: plan.scanned(),
        removed,
        failed,
        kept: plan.kept().into_iter().cloned().collect(),
        orphan_cleanup,
        snapshot,
    }
}
