//! Visual theme and styling.

use console::Style;

/// brewman's visual theme.
#[derive(Debug, Clone)]
pub struct BrewmanTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for BrewmanTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BrewmanTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message with its marker.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    /// Format a warning message with its marker.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("!"), msg)
    }

    /// Format an error message with its marker.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }
}

/// Whether colored output should be used.
///
/// Respects the `NO_COLOR` convention and requires a terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_success_contains_message() {
        let theme = BrewmanTheme::plain();
        assert!(theme.format_success("done").contains("done"));
        assert!(theme.format_success("done").contains('✓'));
    }

    #[test]
    fn format_error_contains_message() {
        let theme = BrewmanTheme::plain();
        assert!(theme.format_error("broken").contains("broken"));
        assert!(theme.format_error("broken").contains('✗'));
    }

    #[test]
    fn plain_theme_adds_no_ansi_codes() {
        let theme = BrewmanTheme::plain();
        assert_eq!(theme.format_header("Title"), "Title");
    }
}
