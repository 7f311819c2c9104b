//! Candidate collection and dependency checking.
//!
//! The candidate list is explicit input (CLI arguments or configuration),
//! never a baked-in constant. Names not currently installed are excluded
//! before the dependency checker runs, so the checker is only ever asked
//! about installed packages.

use std::collections::HashSet;

use crate::brew::PackageManager;
use crate::error::Result;

use super::classifier::{classify, Classification};
use super::{CleanupPlan, PackageRecord};

/// Scan and classify the candidate list.
///
/// Queries are performed one package at a time, in candidate order. A
/// failed reverse-dependent query does not abort the run: the package is
/// kept conservatively and the failure is logged, since removing a
/// package whose dependents are unknown could break other installs.
pub fn collect(manager: &dyn PackageManager, names: &[String]) -> Result<CleanupPlan> {
    let mut plan = CleanupPlan::default();
    let mut seen = HashSet::new();

    for name in names {
        let name = name.trim();
        if name.is_empty() || !seen.insert(name.to_string()) {
            continue;
        }

        if !manager.is_installed(name)? {
            tracing::debug!("{} is not installed, skipping", name);
            plan.not_installed.push(name.to_string());
            continue;
        }

        let record = match manager.reverse_dependents(name) {
            Ok(dependents) => {
                let classification = classify(&dependents);
                PackageRecord {
                    name: name.to_string(),
                    dependents,
                    dependents_unknown: false,
                    classification,
                }
            }
            Err(e) => {
                // Unknown dependents: keep rather than wrongly remove.
                tracing::warn!("dependent query failed for {}: {}", name, e);
                PackageRecord {
                    name: name.to_string(),
                    dependents: Vec::new(),
                    dependents_unknown: true,
                    classification: Classification::KeptAsDependency,
                }
            }
        };

        plan.records.push(record);
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brew::MockManager;

    #[test]
    fn collect_classifies_example_from_contract() {
        // X has no dependents, Y is needed by W, Z has no dependents.
        let manager = MockManager::new()
            .with_formulae(vec!["x", "y", "z", "w"])
            .with_dependents("y", vec!["w"]);

        let names: Vec<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
        let plan = collect(&manager, &names).unwrap();

        let safe: Vec<&str> = plan.safe().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(safe, vec!["x", "z"]);

        let kept = plan.kept();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "y");
        assert_eq!(kept[0].dependents, vec!["w"]);
    }

    #[test]
    fn collect_excludes_not_installed() {
        let manager = MockManager::new().with_formulae(vec!["x"]);
        let names: Vec<String> = ["x", "ghost"].iter().map(|s| s.to_string()).collect();

        let plan = collect(&manager, &names).unwrap();

        assert_eq!(plan.records.len(), 1);
        assert_eq!(plan.not_installed, vec!["ghost"]);
        assert_eq!(plan.scanned(), 2);
    }

    #[test]
    fn collect_keeps_package_on_query_failure() {
        let manager = MockManager::new()
            .with_formulae(vec!["x"])
            .with_failing_query("x");

        let plan = collect(&manager, &["x".to_string()]).unwrap();

        assert_eq!(plan.records.len(), 1);
        let record = &plan.records[0];
        assert!(record.dependents_unknown);
        assert_eq!(record.classification, Classification::KeptAsDependency);
        assert!(!plan.has_removals());
    }

    #[test]
    fn collect_deduplicates_preserving_order() {
        let manager = MockManager::new().with_formulae(vec!["a", "b"]);
        let names: Vec<String> = ["a", "b", "a", "  ", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let plan = collect(&manager, &names).unwrap();

        let order: Vec<&str> = plan.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn collect_is_deterministic_for_unchanged_state() {
        let manager = MockManager::new()
            .with_formulae(vec!["x", "y", "w"])
            .with_dependents("y", vec!["w"]);
        let names: Vec<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();

        let first = collect(&manager, &names).unwrap();
        let second = collect(&manager, &names).unwrap();

        let classes = |plan: &CleanupPlan| -> Vec<Classification> {
            plan.records.iter().map(|r| r.classification).collect()
        };
        assert_eq!(classes(&first), classes(&second));
    }
}
