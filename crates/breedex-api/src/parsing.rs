//! Conversion from wire DTOs to domain records.

use breedex_core::{BreedImage, BreedRecord};

use crate::models::{ApiConfig, WireBreed, WireImage};

/// Convert a wire breed into a cache record for the configured species.
///
/// A missing `image.url` is rebuilt from `reference_image_id`. When the API
/// sends no description, `bred_for` stands in for it.
pub fn to_breed_record(config: &ApiConfig, wire: WireBreed) -> BreedRecord {
    let image_url = wire
        .image
        .and_then(|image| image.url)
        .filter(|url| !url.trim().is_empty())
        .or_else(|| {
            wire.reference_image_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|id| format!("{}/{id}.jpg", config.cdn_base))
        });

    let description = wire
        .description
        .filter(|d| !d.trim().is_empty())
        .or(wire.bred_for)
        .unwrap_or_default();

    let mut record = BreedRecord::new(config.species, wire.id.into_string(), wire.name);
    record.origin = wire.origin.unwrap_or_default();
    record.temperament = wire.temperament.unwrap_or_default();
    record.description = description;
    record.life_span = wire.life_span.unwrap_or_default();
    record.image_url = image_url;
    record
}

/// Convert wire breeds, preserving order.
pub fn to_breed_records(config: &ApiConfig, wire: Vec<WireBreed>) -> Vec<BreedRecord> {
    wire.into_iter()
        .map(|breed| to_breed_record(config, breed))
        .collect()
}

/// Convert wire images, dropping entries without a usable URL.
pub fn to_breed_images(wire: Vec<WireImage>) -> Vec<BreedImage> {
    wire.into_iter()
        .filter(|image| !image.url.trim().is_empty())
        .map(|image| BreedImage {
            id: image.id,
            url: image.url,
        })
        .collect()
}
