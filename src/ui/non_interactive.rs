//! Non-interactive UI for `--yes` and CI/headless environments.

use crate::error::Result;

use super::theme::BrewmanTheme;
use super::{ConfirmPrompt, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts are never shown; each confirmation resolves to its default
/// answer, which for the removal gate is "no". Commands that should
/// proceed without prompting (`--yes`) skip the prompt instead of relying
/// on this default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: BrewmanTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: BrewmanTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool> {
        tracing::debug!(
            "non-interactive confirm '{}' resolved to default {}",
            prompt.key,
            prompt.default
        );
        Ok(prompt.default)
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        // Spinners are noise in log-based environments.
        Box::new(ProgressSpinner::hidden())
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
