//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` and friends to exit codes and user-facing messages.

use breedex_core::{CoreError, PathError, SourceError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Invalid arguments or an unknown breed.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Remote breed API failure.
    #[error("Remote API error: {0}")]
    Remote(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Remote(_) => 69,   // EX_UNAVAILABLE
            Self::Database(_) => 73, // EX_CANTCREAT
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<&CoreError> for CliError {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Source(SourceError::Unauthorized) => Self::Config(err.to_string()),
            CoreError::Source(SourceError::Configuration(msg)) => Self::Config(msg.clone()),
            CoreError::Source(source_err) => Self::Remote(source_err.to_string()),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg.clone()),
            CoreError::Internal(msg) => Self::Core(msg.clone()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from(&err)
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error bubbled up to `main`.
///
/// Looks through the `anyhow` chain for a known error type and falls back
/// to 1.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(core) = cause.downcast_ref::<CoreError>() {
            return CliError::from(core).exit_code();
        }
        if cause.downcast_ref::<PathError>().is_some() {
            return CliError::Config(String::new()).exit_code();
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return CliError::Io(String::new()).exit_code();
        }
    }
    1
}
