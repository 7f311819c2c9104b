//! Configuration loading, parsing, and defaults.
//!
//! Configuration is a single YAML file. An explicit `--config` path wins;
//! otherwise `~/.config/brewman/config.yml` is used when present, and
//! built-in defaults otherwise. Partial files are fine: every field has a
//! default.

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load, LoadedConfig};
pub use schema::{BrewmanConfig, CleanupConfig, PackageGroups, TemplateConfig};
