//! Breed listing, search and image lookups.

use breedex_core::{BreedImage, BreedRecord};
use tracing::debug;

use super::BreedApiClient;
use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{WireBreed, WireImage};
use crate::parsing::{to_breed_images, to_breed_records};
use crate::url::{build_breeds_url, build_images_url, build_search_url};

impl<B: HttpBackend> BreedApiClient<B> {
    /// Fetch one page of breeds.
    pub(crate) async fn list_breeds(&self, limit: u32, page: u32) -> ApiResult<Vec<BreedRecord>> {
        let url = build_breeds_url(&self.config, limit, page);
        let wire: Vec<WireBreed> = self.backend.get_json(&url).await?;
        debug!(species = %self.config.species, page, count = wire.len(), "Fetched breed page");
        Ok(to_breed_records(&self.config, wire))
    }

    /// Search breeds by name.
    pub(crate) async fn search(&self, query: &str) -> ApiResult<Vec<BreedRecord>> {
        let url = build_search_url(&self.config, query);
        let wire: Vec<WireBreed> = self.backend.get_json(&url).await?;
        debug!(species = %self.config.species, query, count = wire.len(), "Searched breeds");
        Ok(to_breed_records(&self.config, wire))
    }

    /// Fetch images for a breed.
    pub(crate) async fn images(&self, breed_id: &str, limit: u32) -> ApiResult<Vec<BreedImage>> {
        let url = build_images_url(&self.config, breed_id, limit);
        let wire: Vec<WireImage> = self.backend.get_json(&url).await?;
        Ok(to_breed_images(wire))
    }
}
