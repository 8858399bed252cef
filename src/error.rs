//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these errors come from the network, decoding and command layers.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for fetches and commands.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured base URL cannot have path segments appended
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The API answered 404 for this URL
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The API answered with any other non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// A response or cached payload was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without its required argument
    #[error("{0}")]
    MissingArgument(&'static str),

    /// `inspect` was asked about something not in the pokedex
    #[error("no caught pokemon found: {0}")]
    NotCaught(String),

    /// Writing command output failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message_is_verbatim() {
        let err = PokedexError::MissingArgument("no pokemon found");
        assert_eq!(err.to_string(), "no pokemon found");
    }

    #[test]
    fn test_status_message() {
        let err = PokedexError::Status {
            status: 503,
            url: "https://pokeapi.co/api/v2/pokemon/pikachu".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 503 from https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn test_invalid_base_url_message() {
        let err = PokedexError::InvalidBaseUrl {
            url: "pokeapi".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid base URL pokeapi: relative URL without a base"
        );
    }

    #[test]
    fn test_decode_from_serde() {
        let serde_err = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let err: PokedexError = serde_err.into();
        assert!(matches!(err, PokedexError::Decode(_)));
    }
}
