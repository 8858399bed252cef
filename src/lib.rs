//! Pokedex CLI - An interactive PokeAPI client
//!
//! Browses location areas, explores encounters and catches pokemon, with
//! responses held in a time-expiring cache swept by a background task.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::ExpiringCache;
pub use client::PokeApiClient;
pub use commands::{Dispatcher, Pokedex};
pub use config::Config;
pub use error::{PokedexError, Result};
