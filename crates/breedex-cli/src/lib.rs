#![doc = include_str!("../README.md")]

pub mod bootstrap;
pub mod commands;
pub mod config_commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, FilterArgs, SpeciesArg};
pub use config_commands::ConfigCommand;
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
