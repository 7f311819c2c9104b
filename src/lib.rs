//! brewman - Homebrew maintenance automation.
//!
//! brewman automates the chores of keeping a Homebrew installation tidy:
//! dependency-safe package cleanup, application scanning, and install
//! script generation from package templates.
//!
//! # Modules
//!
//! - [`brew`] - Package manager adapter (trait, CLI client, test mock)
//! - [`cleanup`] - Dependency-safe removal pipeline
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and defaults
//! - [`error`] - Error types and result aliases
//! - [`scan`] - Installed-application scanning
//! - [`shell`] - External command execution
//! - [`templates`] - Install-script generation
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use brewman::brew::MockManager;
//! use brewman::cleanup::{collect, execute};
//!
//! let manager = MockManager::new()
//!     .with_formulae(vec!["xz", "imagemagick"])
//!     .with_dependents("xz", vec!["imagemagick"]);
//!
//! let candidates = vec!["xz".to_string()];
//! let plan = collect(&manager, &candidates).unwrap();
//! assert!(!plan.has_removals()); // imagemagick still needs xz
//!
//! let report = execute(&manager, &plan);
//! assert!(report.removed.is_empty());
//! ```

pub mod brew;
pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;
pub mod scan;
pub mod shell;
pub mod templates;
pub mod ui;

pub use error::{BrewmanError, Result};
