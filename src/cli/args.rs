//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// brewman - Homebrew maintenance automation.
#[derive(Debug, Parser)]
#[command(name = "brewman")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.config/brewman/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove packages that nothing else depends on (default command)
    Cleanup(CleanupArgs),

    /// Scan installed applications for Homebrew equivalents
    Scan(ScanArgs),

    /// List installed formulae and casks
    List(ListArgs),

    /// Generate install scripts from package templates
    Generate(GenerateArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `cleanup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CleanupArgs {
    /// Candidate packages (overrides `cleanup.candidates` from config)
    pub packages: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would be removed without removing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Export results to a JSON file
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Template to generate
    pub template: Option<String>,

    /// Output file path (single template only)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Generate every configured template
    #[arg(long, conflicts_with_all = ["template", "output"])]
    pub all: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cleanup_accepts_positional_packages() {
        let cli = Cli::parse_from(["brewman", "cleanup", "jq", "tree"]);
        match cli.command {
            Some(Commands::Cleanup(args)) => {
                assert_eq!(args.packages, vec!["jq", "tree"]);
                assert!(!args.yes);
            }
            _ => panic!("expected cleanup command"),
        }
    }

    #[test]
    fn cleanup_yes_and_dry_run_flags() {
        let cli = Cli::parse_from(["brewman", "cleanup", "--yes", "--dry-run"]);
        match cli.command {
            Some(Commands::Cleanup(args)) => {
                assert!(args.yes);
                assert!(args.dry_run);
            }
            _ => panic!("expected cleanup command"),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["brewman"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_all_conflicts_with_template() {
        let result = Cli::try_parse_from(["brewman", "generate", "full", "--all"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_config_flag_applies_to_subcommands() {
        let cli = Cli::parse_from(["brewman", "list", "--config", "/tmp/c.yml"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.yml")));
    }
}
