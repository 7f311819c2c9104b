//! External command execution.
//!
//! Every interaction with Homebrew goes through [`run`], which invokes the
//! program directly (no shell wrapping) and captures both output streams.
//! No timeout is imposed: a hang in one call blocks the whole run, which
//! is acceptable for an interactive, operator-supervised tool.

use crate::error::{BrewmanError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Output lines of stdout, trimmed, with blanks dropped.
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Execute a program with arguments, capturing output.
///
/// Returns `Ok` with a failure result when the program runs but exits
/// non-zero; returns `Err` only when the program cannot be spawned at all.
pub fn run(program: &str, args: &[&str]) -> Result<CommandResult> {
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|_| BrewmanError::CommandFailed {
            command: render_command(program, args),
            code: None,
        })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Execute a program and return success/failure.
pub fn run_check(program: &str, args: &[&str]) -> bool {
    run(program, args).map(|r| r.success).unwrap_or(false)
}

/// Render a program and its arguments for error messages.
pub fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_successful_command() {
        let result = run("true", &[]).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn run_failing_command() {
        let result = run("false", &[]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn run_captures_stdout() {
        let result = run("echo", &["hello"]).unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn run_missing_program_is_error() {
        let err = run("definitely-not-a-real-binary-7f3a", &[]).unwrap_err();
        assert!(matches!(
            err,
            crate::error::BrewmanError::CommandFailed { .. }
        ));
    }

    #[test]
    fn run_check_returns_bool() {
        assert!(run_check("true", &[]));
        assert!(!run_check("false", &[]));
        assert!(!run_check("definitely-not-a-real-binary-7f3a", &[]));
    }

    #[test]
    fn stdout_lines_drops_blanks_and_trims() {
        let result = CommandResult::success("a\n\n  b  \n".into(), String::new(), Duration::ZERO);
        assert_eq!(result.stdout_lines(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn render_command_includes_args() {
        assert_eq!(render_command("brew", &["uninstall", "jq"]), "brew uninstall jq");
        assert_eq!(render_command("brew", &[]), "brew");
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = run("echo", &["fast"]).unwrap();
        assert!(result.duration.as_millis() < 5000);
    }
}
