//! List command implementation.

use serde::Serialize;

use crate::brew::{BrewCli, PackageManager};
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

#[derive(Debug, Serialize)]
struct InstalledPackages {
    formulae: Vec<String>,
    casks: Vec<String>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Run against a specific package manager.
    pub fn execute_with_manager(
        &self,
        manager: &dyn PackageManager,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let installed = match self.query(manager) {
            Ok(installed) => installed,
            Err(e) => {
                ui.error(&format!("Could not query Homebrew: {}", e));
                return Ok(CommandResult::failure(2));
            }
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&installed).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Installed packages");
        ui.message(&format!("Formulae ({}):", installed.formulae.len()));
        for name in &installed.formulae {
            ui.message(&format!("  {}", name));
        }
        ui.message(&format!("Casks ({}):", installed.casks.len()));
        for name in &installed.casks {
            ui.message(&format!("  {}", name));
        }

        Ok(CommandResult::success())
    }

    fn query(&self, manager: &dyn PackageManager) -> Result<InstalledPackages> {
        manager.version()?;
        Ok(InstalledPackages {
            formulae: manager.installed_formulae()?,
            casks: manager.installed_casks()?,
        })
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = BrewCli::new();
        self.execute_with_manager(&manager, ui)
    }
}
