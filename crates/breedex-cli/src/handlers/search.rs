//! Search command handler.

use anyhow::{Result, bail};
use breedex_core::{BreedFilter, Species};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_breed_table;

/// Execute the search command.
///
/// Runs a remote search whose results replace the cached breeds of the
/// species, then lists them.
pub async fn execute(ctx: &CliContext, species: Option<Species>, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        bail!(CliError::Arguments("search query must not be empty".to_string()));
    }

    let species = ctx.resolve_species(species).await?;
    let limit = ctx.page_size().await?;
    ctx.app()
        .breeds()
        .refresh(species, 0, Some(query), limit)
        .await?;

    let breeds = ctx
        .app()
        .breeds()
        .list(species, &BreedFilter::default())
        .await?;

    if breeds.is_empty() {
        println!("No {species} breeds found for '{}'.", query.trim());
        return Ok(());
    }

    println!("Found {} {species} breed(s) for '{}':\n", breeds.len(), query.trim());
    print_breed_table(&breeds);
    Ok(())
}
