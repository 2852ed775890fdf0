//! HTTP backend abstraction for the breed APIs.
//!
//! The production backend uses reqwest with a request timeout and no retry.
//! Tests inject `testing::FakeBackend` instead.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `BreedSource` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// The API key, when present, is installed as a default header so every
/// request carries it.
pub struct ReqwestBackend {
    client: reqwest::Client,
    has_api_key: bool,
}

impl ReqwestBackend {
    /// Create a new reqwest backend.
    pub fn new(api_key: Option<&str>, user_agent: &str, timeout: Duration) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| ApiError::ClientConfig(format!("invalid API key: {e}")))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            has_api_key: api_key.is_some(),
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        debug!(url = %url, authenticated = self.has_api_key, "GET");
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(None, "test", Duration::from_secs(30)).unwrap();
        assert!(!backend.has_api_key);

        let backend = ReqwestBackend::new(Some("key"), "test", Duration::from_secs(30)).unwrap();
        assert!(backend.has_api_key);
    }

    #[test]
    fn test_invalid_api_key_is_rejected() {
        let result = ReqwestBackend::new(Some("bad\nkey"), "test", Duration::from_secs(30));
        assert!(matches!(result, Err(ApiError::ClientConfig(_))));
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_returns_canned_json() {
            let backend = FakeBackend::new()
                .with_response("breeds", CannedResponse::Json(json!([{"id": "abys"}])));

            let url = Url::parse("https://example.com/v1/breeds?limit=1").unwrap();
            let result: serde_json::Value = backend.get_json(&url).await.unwrap();

            assert_eq!(result[0]["id"], "abys");
            assert_eq!(backend.requested(), vec![url.to_string()]);
        }

        #[tokio::test]
        async fn test_fake_backend_status_and_unknown_url() {
            let backend = FakeBackend::new().with_response("limited", CannedResponse::Status(429));

            let url = Url::parse("https://example.com/limited").unwrap();
            let result: ApiResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(
                result,
                Err(ApiError::RequestFailed { status: 429, .. })
            ));

            let url = Url::parse("https://example.com/unknown").unwrap();
            let result: ApiResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(
                result,
                Err(ApiError::RequestFailed { status: 404, .. })
            ));
        }
    }
}
