//! Row mapping helpers for `SQLite` queries.

use breedex_core::{BreedRecord, RepositoryError, Species};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for breed queries.
pub const BREED_SELECT_COLUMNS: &str = "species, id, name, origin, temperament, description, life_span, image_url, additional_images, is_favorite";

/// Map a sqlx error to a storage error.
pub fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Encode a gallery image list for the `additional_images` column.
pub fn encode_images(images: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(images).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Parse a database row into a `BreedRecord`.
pub fn row_to_breed(row: &SqliteRow) -> Result<BreedRecord, RepositoryError> {
    let species: String = row.try_get("species").map_err(storage)?;
    let species: Species = species
        .parse()
        .map_err(|e: breedex_core::ParseSpeciesError| RepositoryError::Serialization(e.to_string()))?;

    let images_json: String = row.try_get("additional_images").map_err(storage)?;
    let additional_images: Vec<String> = serde_json::from_str(&images_json)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    Ok(BreedRecord {
        id: row.try_get("id").map_err(storage)?,
        name: row.try_get("name").map_err(storage)?,
        origin: row.try_get("origin").map_err(storage)?,
        temperament: row.try_get("temperament").map_err(storage)?,
        description: row.try_get("description").map_err(storage)?,
        life_span: row.try_get("life_span").map_err(storage)?,
        image_url: row.try_get("image_url").map_err(storage)?,
        additional_images,
        is_favorite: row.try_get("is_favorite").map_err(storage)?,
        species,
    })
}
