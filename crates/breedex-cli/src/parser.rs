//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Browse cat and dog breeds from the command line.
///
/// Handles global options and dispatches to subcommands.
#[derive(Parser)]
#[command(name = "breedex")]
#[command(about = "Browse, search and favorite cat and dog breeds")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
