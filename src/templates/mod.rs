//! Install-script generation from package templates.
//!
//! A template selects package groups from the configuration; the
//! generator renders them into a standalone POSIX shell script so a fresh
//! machine (or VM) can be provisioned without brewman installed.

pub mod generator;

pub use generator::{generate_all, render_script, resolve_packages, write_script, PackageSet};
