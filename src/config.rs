//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::commands::DEFAULT_BENCHMARK;

/// Default PokeAPI root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// PokeAPI root URL, without a trailing slash
    pub base_url: String,
    /// Cache TTL in milliseconds, also the sweep period
    pub cache_ttl_ms: u64,
    /// Location areas shown per `map`/`mapb` page
    pub page_size: usize,
    /// Base experience at which the catch chance is one half
    pub catch_benchmark: u32,
    /// Store fetched payloads in the cache after a miss
    pub cache_write_back: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unparsable or zero values fall back to the default.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL_MS` - Cache TTL in milliseconds (default: 5000)
    /// - `POKEDEX_PAGE_SIZE` - Locations per page (default: 20)
    /// - `POKEDEX_CATCH_BENCHMARK` - Catch difficulty constant (default: 200)
    /// - `POKEDEX_CACHE_WRITE_BACK` - Populate the cache on a miss (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            cache_ttl_ms: positive_var("POKEDEX_CACHE_TTL_MS").unwrap_or(defaults.cache_ttl_ms),
            page_size: positive_var("POKEDEX_PAGE_SIZE").unwrap_or(defaults.page_size),
            catch_benchmark: positive_var("POKEDEX_CATCH_BENCHMARK")
                .unwrap_or(defaults.catch_benchmark),
            cache_write_back: env::var("POKEDEX_CACHE_WRITE_BACK")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_write_back),
        }
    }

    /// Returns the cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl_ms: 5000,
            page_size: 20,
            catch_benchmark: DEFAULT_BENCHMARK,
            cache_write_back: true,
        }
    }
}

fn positive_var<T>(name: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|v| *v > T::default())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
