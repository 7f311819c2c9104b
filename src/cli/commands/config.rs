//! Config command implementation.

use std::path::PathBuf;

use crate::cli::args::ConfigArgs;
use crate::config;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    config_path: Option<PathBuf>,
    #[allow(dead_code)]
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(config_path: Option<PathBuf>, args: ConfigArgs) -> Self {
        Self { config_path, args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = config::load(self.config_path.as_deref())?;

        match &loaded.path {
            Some(path) => ui.message(&format!("# Source: {}", path.display())),
            None => ui.message("# Source: built-in defaults"),
        }

        let yaml = serde_yaml::to_string(&loaded.config).map_err(anyhow::Error::from)?;
        ui.message(&yaml);

        Ok(CommandResult::success())
    }
}
