//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a
//! uniform interface for executing commands and reporting results.
//! Commands are dispatched via [`CommandDispatcher`].

pub mod cleanup;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod generate;
pub mod list;
pub mod scan;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
