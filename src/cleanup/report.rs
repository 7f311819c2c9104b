//! Run reporting.
//!
//! Console output only; the cleanup core never writes files.

use crate::ui::{Table, UserInterface};

use super::remover::OrphanCleanup;
use super::{CleanupPlan, RunReport};

/// Render the classification result before confirmation.
pub fn render_plan(plan: &CleanupPlan, ui: &mut dyn UserInterface) {
    ui.message(&format!("Scanned {} candidate(s)", plan.scanned()));

    if !plan.not_installed.is_empty() {
        ui.message(&format!(
            "Not installed (skipped): {}",
            plan.not_installed.join(", ")
        ));
    }

    let kept = plan.kept();
    if !kept.is_empty() {
        let mut table = Table::new(vec!["Kept", "Needed by"]);
        for record in &kept {
            let needed_by = if record.dependents_unknown {
                "(dependents unknown)".to_string()
            } else {
                record.dependents.join(", ")
            };
            table.add_row(vec![&record.name, &needed_by]);
        }
        ui.message(&table.render());
    }

    let safe = plan.safe();
    if safe.is_empty() {
        ui.message("Nothing is safe to remove.");
    } else {
        let names: Vec<&str> = safe.iter().map(|r| r.name.as_str()).collect();
        ui.message(&format!(
            "Safe to remove ({}): {}",
            names.len(),
            names.join(", ")
        ));
    }
}

/// Render the final summary after the removal phase.
pub fn render(report: &RunReport, ui: &mut dyn UserInterface) {
    ui.show_header("Cleanup summary");

    ui.message(&format!("Candidates scanned: {}", report.scanned));

    if report.removed.is_empty() {
        ui.message("Removed: none");
    } else {
        ui.success(&format!(
            "Removed ({}): {}",
            report.removed.len(),
            report.removed.join(", ")
        ));
    }

    if !report.kept.is_empty() {
        let mut table = Table::new(vec!["Kept", "Needed by"]);
        for record in &report.kept {
            let needed_by = if record.dependents_unknown {
                "(dependents unknown)".to_string()
            } else {
                record.dependents.join(", ")
            };
            table.add_row(vec![&record.name, &needed_by]);
        }
        ui.message(&table.render());
    }

    // Failures enumerated by name so the operator can retry manually.
    for (name, message) in &report.failed {
        ui.error(&format!("Failed to remove {}: {}", name, message));
    }

    if let OrphanCleanup::Failed(message) = &report.orphan_cleanup {
        ui.warning(&format!("Orphan cleanup failed: {}", message));
    }

    if let Some(snapshot) = &report.snapshot {
        ui.message(&format!(
            "Remaining: {} formulae, {} casks",
            snapshot.formulae, snapshot.casks
        ));
    }
}
