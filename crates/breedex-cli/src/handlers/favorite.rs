//! Favorite command handler.

use anyhow::Result;
use breedex_core::Species;

use crate::bootstrap::CliContext;

/// Execute the favorite command.
///
/// Toggles the favorite flag of a cached breed. An uncached breed is left
/// alone with a hint to refresh first.
pub async fn execute(ctx: &CliContext, species: Option<Species>, id: &str) -> Result<()> {
    let species = ctx.resolve_species(species).await?;

    match ctx.app().breeds().toggle_favorite(species, id).await? {
        Some(true) => println!("★ {id} added to {species} favorites."),
        Some(false) => println!("✓ {id} removed from {species} favorites."),
        None => {
            println!("No cached {species} breed with ID '{id}'.");
            println!("Use 'breedex list --species {species}' to see cached IDs.");
        }
    }
    Ok(())
}
