//! Name matching between applications and Homebrew packages.
//!
//! Application bundle names rarely match package names exactly
//! ("Visual Studio Code" vs `visual-studio-code`), so comparison is
//! case-insensitive and ignores hyphens and spaces.

/// Normalize a name for comparison.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether an application name and a package name refer to the same thing.
pub fn names_match(app: &str, package: &str) -> bool {
    normalize(app) == normalize(package)
}

/// Find the closest Homebrew package for an unmanaged application.
///
/// Casks are tried before formulae since GUI applications usually ship as
/// casks. Exact normalized matches win; a substring match is the
/// fallback.
pub fn find_equivalent(app: &str, casks: &[String], formulae: &[String]) -> Option<String> {
    let normalized = normalize(app);
    if normalized.is_empty() {
        return None;
    }

    for pool in [casks, formulae] {
        if let Some(hit) = pool.iter().find(|p| normalize(p) == normalized) {
            return Some(hit.clone());
        }
    }

    for pool in [casks, formulae] {
        if let Some(hit) = pool.iter().find(|p| {
            let candidate = normalize(p);
            !candidate.is_empty()
                && (candidate.contains(&normalized) || normalized.contains(&candidate))
        }) {
            return Some(hit.clone());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalize_strips_case_hyphens_and_spaces() {
        assert_eq!(normalize("Visual Studio Code"), "visualstudiocode");
        assert_eq!(normalize("alt-tab"), "alttab");
    }

    #[test]
    fn names_match_across_styles() {
        assert!(names_match("Visual Studio Code", "visual-studio-code"));
        assert!(names_match("AltTab", "alt-tab"));
        assert!(!names_match("Safari", "firefox"));
    }

    #[test]
    fn exact_match_prefers_casks() {
        let casks = strings(&["docker"]);
        let formulae = strings(&["docker"]);
        assert_eq!(
            find_equivalent("Docker", &casks, &formulae),
            Some("docker".to_string())
        );
    }

    #[test]
    fn substring_match_is_fallback() {
        let casks = strings(&["visual-studio-code"]);
        assert_eq!(
            find_equivalent("Code", &casks, &[]),
            Some("visual-studio-code".to_string())
        );
    }

    #[test]
    fn exact_beats_substring() {
        let casks = strings(&["firefox-developer-edition", "firefox"]);
        assert_eq!(
            find_equivalent("Firefox", &casks, &[]),
            Some("firefox".to_string())
        );
    }

    #[test]
    fn no_match_returns_none() {
        let casks = strings(&["rectangle"]);
        let formulae = strings(&["jq"]);
        assert_eq!(find_equivalent("Photoshop", &casks, &formulae), None);
    }

    #[test]
    fn empty_name_never_matches() {
        let casks = strings(&["rectangle"]);
        assert_eq!(find_equivalent("", &casks, &[]), None);
    }
}
