//! Show command handler.
//!
//! Prints breed details and the image gallery, fetching gallery images
//! on first view.

use anyhow::Result;
use breedex_core::Species;

use crate::bootstrap::CliContext;
use crate::presentation::display_breed_details;

/// Execute the show command.
///
/// # Errors
///
/// Fails when the breed isn't cached. Gallery fetch failures only leave the
/// gallery empty.
pub async fn execute(ctx: &CliContext, species: Option<Species>, id: &str) -> Result<()> {
    let species = ctx.resolve_species(species).await?;
    let breed = ctx.app().breeds().find(species, id).await?;
    let gallery = ctx.app().breeds().breed_images(species, id).await;

    display_breed_details(&breed, &gallery);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::exit_code_for;
    use crate::handlers::testing::{CATS, test_context};

    #[tokio::test]
    async fn test_show_stores_gallery() {
        let (_db, ctx) = test_context(CATS).await;
        ctx.app()
            .breeds()
            .refresh(Species::Cat, 0, None, 20)
            .await
            .unwrap();

        execute(&ctx, Some(Species::Cat), "abys").await.unwrap();

        let stored = ctx
            .app()
            .breeds()
            .get(Species::Cat, "abys")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            stored.additional_images,
            vec!["https://cdn.example/abys.jpg".to_string()]
        );
    }

    #[tokio::test]
    async fn test_show_unknown_breed_is_usage_error() {
        let (_db, ctx) = test_context(CATS).await;
        let err = execute(&ctx, Some(Species::Cat), "ghost").await.unwrap_err();
        assert_eq!(exit_code_for(&err), 2);
    }
}
