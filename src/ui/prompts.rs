//! Interactive prompts.

use console::Term;
use dialoguer::Confirm;

use crate::error::{BrewmanError, Result};

use super::ConfirmPrompt;

/// Convert dialoguer errors to BrewmanError.
fn map_dialoguer_err(e: dialoguer::Error) -> BrewmanError {
    BrewmanError::Io(e.into())
}

/// Ask a yes/no question on the terminal.
pub fn confirm_user(prompt: &ConfirmPrompt, term: &Term) -> Result<bool> {
    let result = Confirm::new()
        .with_prompt(&prompt.question)
        .default(prompt.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(result)
}
