//! Stats command handler.

use anyhow::Result;
use breedex_core::{BreedFilter, Species, average_lifespan};

use crate::bootstrap::CliContext;
use crate::presentation::format_lifespan;

/// Execute the stats command.
///
/// Prints the number of cached breeds passing `filter` and their average
/// lifespan. Unparseable lifespans count as zero.
pub async fn execute(ctx: &CliContext, species: Option<Species>, filter: &BreedFilter) -> Result<()> {
    let species = ctx.resolve_species(species).await?;
    let breeds = ctx.app().breeds().list(species, filter).await?;

    let scope = if filter.favorites_only {
        "favorite "
    } else {
        ""
    };
    println!("{species} {scope}breeds: {}", breeds.len());
    println!("Average lifespan: {}", format_lifespan(average_lifespan(&breeds)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{CATS, test_context};

    #[tokio::test]
    async fn test_stats_runs_on_empty_and_filled_cache() {
        let (_db, ctx) = test_context(CATS).await;
        execute(&ctx, Some(Species::Cat), &BreedFilter::favorites())
            .await
            .unwrap();

        ctx.app()
            .breeds()
            .refresh(Species::Cat, 0, None, 20)
            .await
            .unwrap();
        execute(&ctx, Some(Species::Cat), &BreedFilter::default())
            .await
            .unwrap();

        let average = ctx
            .app()
            .breeds()
            .average_lifespan(Species::Cat, &BreedFilter::default())
            .await
            .unwrap();
        assert!((average - 12.0).abs() < f64::EPSILON);
    }
}
