//! Cache Module
//!
//! Provides the in-memory response cache with a single TTL and periodic sweeping.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use store::CacheStore;
