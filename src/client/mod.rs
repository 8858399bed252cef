//! Fetch Client Module
//!
//! Translates catalog requests into cache lookups and HTTP calls.

mod pokeapi;

pub use pokeapi::PokeApiClient;
