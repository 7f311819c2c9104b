//! Cleanup command implementation.
//!
//! Drives the pipeline: collect and classify candidates, show the plan,
//! gate on a single confirmation (default "no"), remove, report.
//! Cancellation is not an error; only an unreachable package manager
//! produces a non-zero exit.

use std::path::PathBuf;

use crate::brew::{BrewCli, PackageManager};
use crate::cli::args::CleanupArgs;
use crate::cleanup::{self, report, CleanupOutcome};
use crate::config;
use crate::error::{BrewmanError, Result};
use crate::ui::{ConfirmPrompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The cleanup command implementation.
pub struct CleanupCommand {
    config_path: Option<PathBuf>,
    args: CleanupArgs,
}

impl CleanupCommand {
    /// Create a new cleanup command.
    pub fn new(config_path: Option<PathBuf>, args: CleanupArgs) -> Self {
        Self { config_path, args }
    }

    /// Resolve the candidate list: CLI arguments win over configuration.
    fn candidates(&self) -> Result<Vec<String>> {
        if !self.args.packages.is_empty() {
            return Ok(self.args.packages.clone());
        }
        let loaded = config::load(self.config_path.as_deref())?;
        Ok(loaded.config.cleanup.candidates)
    }

    /// Run the pipeline against a specific package manager.
    ///
    /// Split out from [`Command::execute`] so tests can substitute a mock
    /// manager.
    pub fn execute_with_manager(
        &self,
        manager: &dyn PackageManager,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let candidates = self.candidates()?;

        ui.show_header("Homebrew cleanup");

        if candidates.is_empty() {
            ui.message("No cleanup candidates. Pass package names or set cleanup.candidates in the config.");
            return Ok(CommandResult::success());
        }

        // Fatal only here, before any classification.
        let version = match manager.version() {
            Ok(v) => v,
            Err(BrewmanError::ManagerUnavailable { message }) => {
                ui.error(&format!("Homebrew is not available: {}", message));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        tracing::debug!("package manager: {}", version);

        let mut spinner = ui.start_spinner("Checking reverse dependents...");
        let plan = match cleanup::collect(manager, &candidates) {
            Ok(plan) => {
                spinner.finish_success("Dependents checked");
                plan
            }
            Err(e) => {
                spinner.finish_error("Dependent check failed");
                ui.error(&format!("Could not query Homebrew: {}", e));
                return Ok(CommandResult::failure(2));
            }
        };

        report::render_plan(&plan, ui);

        if !plan.has_removals() {
            return Ok(CommandResult::success());
        }

        if self.args.dry_run {
            ui.message("Dry run - no packages will be removed");
            return Ok(CommandResult::success());
        }

        let outcome = if self.confirmed(plan.safe().len(), ui)? {
            let report = cleanup::execute(manager, &plan);
            CleanupOutcome::Completed(report)
        } else {
            CleanupOutcome::Cancelled
        };

        match outcome {
            CleanupOutcome::Cancelled => {
                ui.message("Cancelled. Nothing was removed.");
                Ok(CommandResult::success())
            }
            CleanupOutcome::Completed(run_report) => {
                report::render(&run_report, ui);
                Ok(CommandResult::success())
            }
        }
    }

    fn confirmed(&self, count: usize, ui: &mut dyn UserInterface) -> Result<bool> {
        if self.args.yes {
            return Ok(true);
        }
        let prompt = ConfirmPrompt::new(
            "cleanup.remove",
            &format!("Remove {} package(s)?", count),
        );
        ui.confirm(&prompt)
    }
}

impl Command for CleanupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = BrewCli::new();
        self.execute_with_manager(&manager, ui)
    }
}
