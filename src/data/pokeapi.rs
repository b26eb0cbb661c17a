//! PokeAPI HTTP client with cache-through fetching
//!
//! Every lookup goes through the response cache first, keyed by the
//! canonical request URL. On a miss the client performs the HTTP GET,
//! stores the raw body bytes under that URL, and decodes them; a later
//! lookup of the same URL within the TTL is served entirely from memory.
//! The cache lock is never held across the network call — the fetch happens
//! between `get` and `add`.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::cache::Cache;
use crate::data::{LocationArea, LocationPage, Pokemon};

/// Base URL for the public PokeAPI
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when talking to the API
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, TLS, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned 404 for the requested resource
    #[error("'{0}' was not found")]
    NotFound(String),

    /// The API returned an unexpected non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        /// Requested URL
        url: String,
        /// Response status code
        status: StatusCode,
    },

    /// The response body could not be decoded
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the PokeAPI REST service
///
/// Cheap to clone; the underlying `reqwest::Client` and the cache handle
/// are both shared.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client against the public PokeAPI.
    pub fn new(cache: Cache) -> Self {
        Self::with_base_url(cache, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL (testing, mirrors).
    pub fn with_base_url(cache: Cache, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            cache,
        }
    }

    /// URL of the first page of the location-area listing.
    pub fn first_location_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Fetches one page of location areas.
    ///
    /// # Arguments
    /// * `url` - A `next`/`previous` URL from an earlier page, or `None`
    ///   for the first page
    pub async fn location_page(&self, url: Option<&str>) -> Result<LocationPage, ApiError> {
        let url = url
            .map(str::to_owned)
            .unwrap_or_else(|| self.first_location_page_url());
        let bytes = self.fetch_bytes(&url, None).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetches a single location area with its Pokémon encounters.
    pub async fn location_area(&self, area: &str) -> Result<LocationArea, ApiError> {
        let url = format!("{}/location-area/{}", self.base_url, area);
        let bytes = self.fetch_bytes(&url, Some(area)).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetches a Pokémon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let bytes = self.fetch_bytes(&url, Some(name)).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Returns the raw body for `url`, from cache when fresh.
    ///
    /// `resource` is the user-facing name reported when the API answers
    /// 404; it falls back to the URL itself.
    async fn fetch_bytes(&self, url: &str, resource: Option<&str>) -> Result<Vec<u8>, ApiError> {
        if let Some(bytes) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(bytes);
        }
        debug!(url, "cache miss, fetching from API");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(resource.unwrap_or(url).to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?.to_vec();
        self.cache.add(url, bytes.clone());
        Ok(bytes)
    }
}
