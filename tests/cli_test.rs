//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Install a scripted `brew` stand-in into a temp dir.
///
/// Installed packages: git, xz, jq. imagemagick depends on xz.
#[cfg(unix)]
fn fake_brew(temp: &TempDir) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = temp.path().join("brew");
    let script = r#"#!/bin/sh
case "$1" in
  --version)
    echo "Homebrew 4.2.0"
    ;;
  list)
    case "$2" in
      --formula)
        printf 'git\njq\nxz\n'
        ;;
      --cask)
        exit 1
        ;;
      git|jq|xz)
        exit 0
        ;;
      *)
        exit 1
        ;;
    esac
    ;;
  uses)
    # $2 is --installed, $3 the package
    if [ "$3" = "xz" ]; then
      echo imagemagick
    fi
    ;;
  uninstall)
    exit 0
    ;;
  autoremove)
    exit 0
    ;;
esac
exit 0
"#;
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Homebrew maintenance automation"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cleanup_removes_safe_and_keeps_depended_upon() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let brew = fake_brew(&temp);

    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.env("BREWMAN_BREW_BIN", &brew);
    cmd.args(["cleanup", "--yes", "jq", "xz", "ghost"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Removed (1): jq"))
        .stdout(predicate::str::contains("xz"))
        .stdout(predicate::str::contains("imagemagick"))
        .stdout(predicate::str::contains("ghost"))
        .stdout(predicate::str::contains("Remaining: 3 formulae, 0 casks"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cleanup_without_confirmation_cancels_with_exit_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let brew = fake_brew(&temp);

    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.env("BREWMAN_BREW_BIN", &brew);
    // CI mode: the prompt resolves to its "no" default.
    cmd.env("CI", "true");
    cmd.args(["cleanup", "jq"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cancelled. Nothing was removed."));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cleanup_dry_run_removes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let brew = fake_brew(&temp);

    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.env("BREWMAN_BREW_BIN", &brew);
    cmd.args(["cleanup", "--dry-run", "jq"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Safe to remove (1): jq"));
    Ok(())
}

#[test]
fn cleanup_unavailable_manager_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.env("BREWMAN_BREW_BIN", "/nonexistent/brew-7f3a");
    cmd.args(["cleanup", "--yes", "jq"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Homebrew is not available"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn list_shows_installed_formulae() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let brew = fake_brew(&temp);

    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.env("BREWMAN_BREW_BIN", &brew);
    cmd.args(["list"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Formulae (3):"))
        .stdout(predicate::str::contains("git"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn list_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let brew = fake_brew(&temp);

    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.env("BREWMAN_BREW_BIN", &brew);
    cmd.args(["list", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value["formulae"][0], "git");
    Ok(())
}

#[test]
fn generate_writes_script_to_output_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("config.yml");
    fs::write(&config, format!("output_dir: {}\n", temp.path().display()))?;
    let target = temp.path().join("setup.sh");

    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.args([
        "generate",
        "minimal",
        "--config",
        config.to_str().unwrap(),
        "--output",
        target.to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    let script = fs::read_to_string(&target)?;
    assert!(script.contains("brew install git"));
    Ok(())
}

#[test]
fn generate_unknown_template_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("config.yml");
    fs::write(&config, format!("output_dir: {}\n", temp.path().display()))?;

    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.env("CI", "true");
    cmd.args(["generate", "nope", "--config", config.to_str().unwrap()]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown template: nope"));
    Ok(())
}

#[test]
fn config_prints_resolved_configuration() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("config.yml");
    fs::write(&config, "cleanup:\n  candidates: [jq, tree]\n")?;

    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.args(["config", "--config", config.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("jq"))
        .stdout(predicate::str::contains("Source:"));
    Ok(())
}

#[test]
fn config_missing_explicit_path_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.env("CI", "true");
    cmd.args(["config", "--config", "/nonexistent/config-7f3a.yml"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn completions_emit_bash_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("brewman"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("brewman"));
    Ok(())
}
