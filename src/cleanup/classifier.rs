//! Candidate classification.

/// Classification of a cleanup candidate, computed once per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No installed package depends on it; removal is safe.
    SafeToRemove,
    /// At least one installed package requires it (or its dependents are
    /// unknown), so it stays.
    KeptAsDependency,
}

/// Classify a package from its reverse dependents.
///
/// Deterministic given the checker's output: safe exactly when nothing
/// depends on the package.
pub fn classify(dependents: &[String]) -> Classification {
    if dependents.is_empty() {
        Classification::SafeToRemove
    } else {
        Classification::KeptAsDependency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dependents_is_safe() {
        assert_eq!(classify(&[]), Classification::SafeToRemove);
    }

    #[test]
    fn single_dependent_is_kept() {
        assert_eq!(
            classify(&["imagemagick".to_string()]),
            Classification::KeptAsDependency
        );
    }

    #[test]
    fn many_dependents_is_kept() {
        let dependents: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(classify(&dependents), Classification::KeptAsDependency);
    }

    #[test]
    fn classification_ignores_dependent_order() {
        let forward: Vec<String> = vec!["a".into(), "b".into()];
        let reverse: Vec<String> = vec!["b".into(), "a".into()];
        assert_eq!(classify(&forward), classify(&reverse));
    }
}
