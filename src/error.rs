//! Error types for brewman operations.
//!
//! This module defines [`BrewmanError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only `ManagerUnavailable` is fatal to a cleanup run; every other
//!   error is isolated to the package (or command) it occurred in.
//! - Use `anyhow::Error` (via `BrewmanError::Other`) for unexpected errors.
//! - All errors should provide actionable messages for users.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for brewman operations.
#[derive(Debug, Error)]
pub enum BrewmanError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Referenced template does not exist in the configuration.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// The package manager cannot be queried at all.
    #[error("Homebrew is not available: {message}")]
    ManagerUnavailable { message: String },

    /// An external command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for brewman operations.
pub type Result<T> = std::result::Result<T, BrewmanError>;
