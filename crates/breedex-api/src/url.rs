//! URL construction helpers for the breed APIs.

use crate::models::ApiConfig;
use url::Url;

/// Append a path segment chain to the configured base URL.
fn endpoint(config: &ApiConfig, path: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{path}"));
    url
}

/// `GET {base}/breeds?limit&page`
pub fn build_breeds_url(config: &ApiConfig, limit: u32, page: u32) -> Url {
    let mut url = endpoint(config, "breeds");
    url.set_query(Some(&format!("limit={limit}&page={page}")));
    url
}

/// `GET {base}/breeds/search?q`
pub fn build_search_url(config: &ApiConfig, query: &str) -> Url {
    let mut url = endpoint(config, "breeds/search");
    url.set_query(Some(&format!("q={}", urlencoding::encode(query.trim()))));
    url
}

/// `GET {base}/images/search?breed_ids&limit`
pub fn build_images_url(config: &ApiConfig, breed_id: &str, limit: u32) -> Url {
    let mut url = endpoint(config, "images/search");
    url.set_query(Some(&format!(
        "breed_ids={}&limit={limit}",
        urlencoding::encode(breed_id)
    )));
    url
}
