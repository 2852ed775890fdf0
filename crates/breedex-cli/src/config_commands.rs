//! Preference management subcommands.

use breedex_core::{Species, Theme};
use clap::Subcommand;

/// Configuration management commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the current preferences
    Show,
    /// Update preferences
    Set {
        /// Color theme: system, light or dark
        #[arg(long)]
        theme: Option<Theme>,
        /// Species used when a command doesn't pass --species
        #[arg(long)]
        default_species: Option<Species>,
        /// Breeds fetched per page (1-100)
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Reset all preferences to their defaults
    Reset,
}
