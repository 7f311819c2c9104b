//! Scan command implementation.

use crate::brew::{BrewCli, PackageManager};
use crate::cli::args::ScanArgs;
use crate::error::{BrewmanError, Result};
use crate::scan::{self, ScanResult};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(args: ScanArgs) -> Self {
        Self { args }
    }

    /// Run the scan against a specific package manager.
    pub fn execute_with_manager(
        &self,
        manager: &dyn PackageManager,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if let Err(BrewmanError::ManagerUnavailable { message }) = manager.version() {
            ui.error(&format!("Homebrew is not available: {}", message));
            return Ok(CommandResult::failure(2));
        }

        let mut spinner = ui.start_spinner("Scanning applications...");
        let result = match scan::scan(manager) {
            Ok(result) => {
                spinner.finish_success("Scan complete");
                result
            }
            Err(e) => {
                spinner.finish_error("Scan failed");
                ui.error(&format!("Could not query Homebrew: {}", e));
                return Ok(CommandResult::failure(2));
            }
        };

        if self.args.json {
            ui.message(&scan::to_json(&result)?);
        } else {
            render_summary(&result, ui);
        }

        if let Some(path) = &self.args.export {
            scan::write_export(&result, path)?;
            ui.success(&format!("Results exported to {}", path.display()));
        }

        Ok(CommandResult::success())
    }
}

fn render_summary(result: &ScanResult, ui: &mut dyn UserInterface) {
    ui.show_header("Application scan");

    ui.message(&format!("Applications found: {}", result.apps.len()));
    ui.message(&format!("Homebrew-managed: {}", result.managed().len()));
    ui.message(&format!("Outside Homebrew: {}", result.unmanaged().len()));

    let suggestions = result.with_suggestions();
    if suggestions.is_empty() {
        return;
    }

    ui.message("");
    ui.message("Applications with a Homebrew equivalent:");
    let mut table = Table::new(vec!["Application", "Homebrew package"]);
    for app in suggestions {
        if let Some(suggestion) = &app.suggestion {
            table.add_row(vec![&app.name, suggestion]);
        }
    }
    ui.message(&table.render());
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = BrewCli::new();
        self.execute_with_manager(&manager, ui)
    }
}
