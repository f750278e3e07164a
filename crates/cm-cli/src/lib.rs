//! cm-cli library
//!
//! Argument parsing, logger setup and the command runner behind the `cm`
//! binary.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod confirmation;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{Commands, parse_export_item};
pub use error::{CliError, CliResult};
pub use runner::run;
