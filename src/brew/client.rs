//! Homebrew CLI client.
//!
//! Wraps the `brew` binary. The binary path can be overridden with the
//! `BREWMAN_BREW_BIN` environment variable, which the integration tests
//! use to point at a scripted stand-in.

use crate::error::{BrewmanError, Result};
use crate::shell::command::{render_command, run, CommandResult};

use super::PackageManager;

/// Environment variable overriding the `brew` binary path.
pub const BREW_BIN_ENV: &str = "BREWMAN_BREW_BIN";

/// [`PackageManager`] implementation backed by the `brew` CLI.
#[derive(Debug, Clone)]
pub struct BrewCli {
    binary: String,
}

impl Default for BrewCli {
    fn default() -> Self {
        Self::new()
    }
}

impl BrewCli {
    /// Create a client using `brew` from PATH (or the env override).
    pub fn new() -> Self {
        let binary = std::env::var(BREW_BIN_ENV).unwrap_or_else(|_| "brew".to_string());
        Self { binary }
    }

    /// Create a client with an explicit binary path.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The binary this client invokes.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn brew(&self, args: &[&str]) -> Result<CommandResult> {
        tracing::debug!("running {}", render_command(&self.binary, args));
        run(&self.binary, args)
    }

    /// Run brew and require a zero exit code.
    fn brew_ok(&self, args: &[&str]) -> Result<CommandResult> {
        let result = self.brew(args)?;
        if result.success {
            Ok(result)
        } else {
            Err(BrewmanError::CommandFailed {
                command: render_command(&self.binary, args),
                code: result.exit_code,
            })
        }
    }
}

impl PackageManager for BrewCli {
    fn version(&self) -> Result<String> {
        let result = self.brew(&["--version"]).map_err(|e| {
            BrewmanError::ManagerUnavailable {
                message: e.to_string(),
            }
        })?;
        if !result.success {
            return Err(BrewmanError::ManagerUnavailable {
                message: format!(
                    "'{} --version' exited with code {:?}",
                    self.binary, result.exit_code
                ),
            });
        }
        Ok(result
            .stdout_lines()
            .into_iter()
            .next()
            .unwrap_or_default())
    }

    fn is_installed(&self, name: &str) -> Result<bool> {
        // `brew list <name>` exits non-zero for unknown packages; that is
        // an answer, not a failure.
        let result = self.brew(&["list", name])?;
        Ok(result.success)
    }

    fn reverse_dependents(&self, name: &str) -> Result<Vec<String>> {
        let result = self.brew_ok(&["uses", "--installed", name])?;
        Ok(result.stdout_lines())
    }

    fn uninstall(&self, name: &str) -> Result<()> {
        self.brew_ok(&["uninstall", name])?;
        Ok(())
    }

    fn remove_orphans(&self) -> Result<()> {
        self.brew_ok(&["autoremove"])?;
        Ok(())
    }

    fn installed_formulae(&self) -> Result<Vec<String>> {
        let result = self.brew_ok(&["list", "--formula"])?;
        Ok(result.stdout_lines())
    }

    fn installed_casks(&self) -> Result<Vec<String>> {
        // Casks are macOS-only; treat a failing query as "none".
        let result = self.brew(&["list", "--cask"])?;
        if result.success {
            Ok(result.stdout_lines())
        } else {
            tracing::debug!("cask listing unavailable, assuming none");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binary_is_brew() {
        let client = BrewCli::with_binary("brew");
        assert_eq!(client.binary(), "brew");
    }

    #[test]
    fn with_binary_overrides_path() {
        let client = BrewCli::with_binary("/opt/homebrew/bin/brew");
        assert_eq!(client.binary(), "/opt/homebrew/bin/brew");
    }

    #[test]
    fn version_failure_maps_to_manager_unavailable() {
        let client = BrewCli::with_binary("definitely-not-a-real-binary-7f3a");
        let err = client.version().unwrap_err();
        assert!(matches!(err, BrewmanError::ManagerUnavailable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn version_returns_first_line() {
        // `echo` stands in for brew: any argv is ignored, prints one line.
        let client = BrewCli::with_binary("echo");
        let version = client.version().unwrap();
        assert_eq!(version, "--version");
    }

    #[cfg(unix)]
    #[test]
    fn is_installed_reflects_exit_code() {
        let yes = BrewCli::with_binary("true");
        assert!(yes.is_installed("git").unwrap());

        let no = BrewCli::with_binary("false");
        assert!(!no.is_installed("git").unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn installed_casks_degrades_to_empty_on_failure() {
        let client = BrewCli::with_binary("false");
        assert!(client.installed_casks().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn uninstall_failure_is_command_failed() {
        let client = BrewCli::with_binary("false");
        let err = client.uninstall("jq").unwrap_err();
        assert!(matches!(err, BrewmanError::CommandFailed { .. }));
    }
}
