//! List command handler.
//!
//! Displays cached breeds of one species in a formatted table.

use anyhow::Result;
use breedex_core::{BreedFilter, Species};

use crate::bootstrap::CliContext;
use crate::presentation::print_breed_table;

/// Execute the list command.
///
/// # Errors
///
/// Fails when the cache can't be read.
pub async fn execute(ctx: &CliContext, species: Option<Species>, filter: &BreedFilter) -> Result<()> {
    let species = ctx.resolve_species(species).await?;
    let breeds = ctx.app().breeds().list(species, filter).await?;

    if breeds.is_empty() {
        if filter.is_empty() {
            println!("No {species} breeds cached yet.");
            println!("Use 'breedex refresh --species {species}' to fetch some.");
        } else {
            println!("No {species} breeds match the given filters.");
        }
        return Ok(());
    }

    println!("Found {} {species} breed(s):\n", breeds.len());
    print_breed_table(&breeds);
    Ok(())
}
