//! Filters command handler.

use anyhow::Result;
use breedex_core::Species;

use crate::bootstrap::CliContext;
use crate::presentation::format_lifespan;

/// Execute the filters command.
///
/// Lists the distinct origins and temperament traits of the cached breeds,
/// usable as `list --origin` and `list --temperament` values.
pub async fn execute(ctx: &CliContext, species: Option<Species>) -> Result<()> {
    let species = ctx.resolve_species(species).await?;
    let options = ctx.app().breeds().filter_options(species).await?;

    if options.breed_count == 0 {
        println!("No {species} breeds cached yet.");
        return Ok(());
    }

    println!(
        "{} cached {species} breed(s), average lifespan {}",
        options.breed_count,
        format_lifespan(options.average_lifespan)
    );
    println!();
    println!("Origins ({}):", options.origins.len());
    for origin in &options.origins {
        println!("  {origin}");
    }
    println!();
    println!("Temperaments ({}):", options.temperaments.len());
    for temperament in &options.temperaments {
        println!("  {temperament}");
    }
    Ok(())
}
