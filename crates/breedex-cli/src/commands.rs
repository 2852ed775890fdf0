//! Top-level CLI subcommands.

use breedex_core::{BreedFilter, Species};
use clap::{Args, Subcommand};

use crate::config_commands::ConfigCommand;

/// Species selector shared by every breed command.
#[derive(Args, Debug, Clone, Default)]
pub struct SpeciesArg {
    /// Species to operate on: cat or dog (defaults to the configured species)
    #[arg(short = 's', long = "species")]
    pub species: Option<Species>,
}

/// Optional breed list filters. Matching is case-insensitive.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only breeds whose name contains this text
    #[arg(long)]
    pub name: Option<String>,
    /// Only breeds from this origin
    #[arg(long)]
    pub origin: Option<String>,
    /// Only breeds with this temperament trait
    #[arg(long)]
    pub temperament: Option<String>,
}

impl FilterArgs {
    /// Build the core filter.
    pub fn into_filter(self, favorites_only: bool) -> BreedFilter {
        BreedFilter {
            name: self.name,
            origin: self.origin,
            temperament: self.temperament,
            favorites_only,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the data directory and database path in use
    Paths,
    /// Fetch breeds from the remote API into the local cache
    Refresh {
        #[command(flatten)]
        species: SpeciesArg,
        /// Page to fetch (0 replaces the cache, later pages append)
        #[arg(short = 'p', long, default_value_t = 0)]
        page: u32,
        /// Search by name instead of paging (always replaces the cache)
        #[arg(short = 'q', long)]
        query: Option<String>,
    },
    /// List cached breeds
    List {
        #[command(flatten)]
        species: SpeciesArg,
        /// Only show favorites
        #[arg(short = 'f', long)]
        favorites: bool,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Search breeds by name and list the results
    Search {
        /// Name or part of a name to search for
        query: String,
        #[command(flatten)]
        species: SpeciesArg,
    },
    /// Toggle the favorite flag of a cached breed
    Favorite {
        /// Breed ID as shown by `list`
        id: String,
        #[command(flatten)]
        species: SpeciesArg,
    },
    /// Show breed details and its image gallery
    Show {
        /// Breed ID as shown by `list`
        id: String,
        #[command(flatten)]
        species: SpeciesArg,
    },
    /// Show breed count and average lifespan
    Stats {
        #[command(flatten)]
        species: SpeciesArg,
        /// Only count favorites
        #[arg(short = 'f', long)]
        favorites: bool,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show the origins and temperament traits available for filtering
    Filters {
        #[command(flatten)]
        species: SpeciesArg,
    },
    /// View or change preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}
