//! Refresh command handler.

use anyhow::Result;
use breedex_core::{RefreshMode, Species};

use crate::bootstrap::CliContext;

/// Execute the refresh command.
///
/// Fetches one page (or a search result) from the remote API and merges it
/// into the cache using the configured page size.
///
/// # Errors
///
/// Fails when the remote fetch or the cache write fails. The cache is left
/// untouched by a failed fetch.
pub async fn execute(
    ctx: &CliContext,
    species: Option<Species>,
    page: u32,
    query: Option<&str>,
) -> Result<()> {
    let species = ctx.resolve_species(species).await?;
    let limit = ctx.page_size().await?;

    let outcome = ctx
        .app()
        .breeds()
        .refresh(species, page, query, limit)
        .await?;

    match outcome.mode {
        RefreshMode::Replace => println!(
            "✓ Cached {} {species} breed(s) ({} fetched)",
            outcome.written, outcome.fetched
        ),
        RefreshMode::Append => println!(
            "✓ Added {} new {species} breed(s) from page {page} ({} fetched)",
            outcome.written, outcome.fetched
        ),
    }
    Ok(())
}
