//! PokeAPI Fetch Client
//!
//! Read operations over the catalog API, each fronted by the expiring cache.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, NamedResource, Pokemon};

// == PokeAPI Client ==
/// HTTP client for PokeAPI with a response cache keyed by request URL.
///
/// Every fetch checks the cache first. On a miss the response body is fetched,
/// decoded, and (when write-back is enabled) stored under the same URL.
#[derive(Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
    cache: ExpiringCache,
    write_back: bool,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client against `base_url` with a cache of the given TTL.
    ///
    /// Fails if `base_url` is not an absolute URL that can take a path. Must
    /// be called from within a tokio runtime, since the cache starts its
    /// sweeper immediately.
    pub fn new(
        base_url: impl Into<String>,
        cache_ttl: Duration,
        write_back: bool,
    ) -> Result<Self> {
        let base_url = parse_base_url(&base_url.into())?;
        debug!(base_url = %base_url, ?cache_ttl, write_back, "Creating PokeAPI client");

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            cache: ExpiringCache::new(cache_ttl),
            write_back,
        })
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            config.cache_ttl(),
            config.cache_write_back,
        )
    }

    // == URLs ==
    /// URL of one page of location areas. Also its cache key.
    pub fn location_areas_url(&self, limit: usize, offset: usize) -> String {
        let mut url = self.endpoint(&["location-area"]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        url.into()
    }

    /// URL of a single location area. Also its cache key.
    pub fn location_area_url(&self, name: &str) -> String {
        self.endpoint(&["location-area", name]).into()
    }

    /// URL of a single pokemon. Also its cache key.
    pub fn pokemon_url(&self, name: &str) -> String {
        self.endpoint(&["pokemon", name]).into()
    }

    /// Appends each segment to the base path, percent-encoding `/`, `?` and `#`
    /// so a name always stays one segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Cannot fail: parse_base_url rejects cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // == Operations ==
    /// Lists location areas, `limit` at a time starting at `offset`.
    pub async fn list_location_areas(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<NamedResource>> {
        let page: LocationAreaPage = self.fetch(&self.location_areas_url(limit, offset)).await?;
        Ok(page.results)
    }

    /// Fetches encounter data for the named location area.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch(&self.location_area_url(name)).await
    }

    /// Fetches full detail for the named pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch(&self.pokemon_url(name)).await
    }

    /// Returns the response cache.
    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    /// Stops the cache sweeper. The client is consumed.
    pub async fn shutdown(self) {
        self.cache.shutdown().await;
    }

    // == Fetch ==
    #[instrument(skip(self))]
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(payload) = self.cache.get(url).await {
            debug!("Serving from cache");
            return Ok(serde_json::from_slice(&payload)?);
        }

        let payload = self.request(url).await?;
        let value = serde_json::from_slice(&payload)?;

        if self.write_back {
            self.cache.add(url, payload).await;
        }

        Ok(value)
    }

    async fn request(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Cache miss, requesting {}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            PokedexError::Network(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            warn!("Server returned error: {}", status);
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let invalid = |reason: String| PokedexError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot take a path".to_string()));
    }
    Ok(url)
}
