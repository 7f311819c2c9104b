//! Generate command implementation.

use std::path::PathBuf;

use crate::cli::args::GenerateArgs;
use crate::config;
use crate::error::{BrewmanError, Result};
use crate::templates::{generate_all, write_script};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    config_path: Option<PathBuf>,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(config_path: Option<PathBuf>, args: GenerateArgs) -> Self {
        Self { config_path, args }
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = config::load(self.config_path.as_deref())?;

        if self.args.all {
            let paths = generate_all(&loaded.config)?;
            for path in &paths {
                ui.success(&format!("Generated {}", path.display()));
            }
            return Ok(CommandResult::success());
        }

        let Some(name) = &self.args.template else {
            ui.error("Specify a template name or --all");
            let available: Vec<&str> =
                loaded.config.templates.keys().map(String::as_str).collect();
            ui.message(&format!("Available templates: {}", available.join(", ")));
            return Ok(CommandResult::failure(1));
        };

        match write_script(&loaded.config, name, self.args.output.as_deref()) {
            Ok(path) => {
                ui.success(&format!("Generated {}", path.display()));
                Ok(CommandResult::success())
            }
            Err(BrewmanError::UnknownTemplate { name }) => {
                ui.error(&format!("Unknown template: {}", name));
                let available: Vec<&str> =
                    loaded.config.templates.keys().map(String::as_str).collect();
                ui.message(&format!("Available templates: {}", available.join(", ")));
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
