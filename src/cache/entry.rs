//! Cache Entry Module
//!
//! Defines a single cached response payload stamped with its insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload and the instant it was inserted.
///
/// Entries are never mutated after insertion. Re-adding a key replaces the
/// whole entry, timestamp included.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes, opaque to the cache
    pub payload: Vec<u8>,
    /// Insertion instant
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(payload: Vec<u8>) -> Self {
        Self::created_at(payload, Instant::now())
    }

    /// Creates an entry with an explicit insertion instant.
    pub fn created_at(payload: Vec<u8>, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    // == Age ==
    /// Returns how long the entry has lived as of `now`.
    ///
    /// Saturates to zero if `now` precedes the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry should be evicted by a sweep at `now`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// live. Only an age strictly greater than the TTL makes it stale.
    pub fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}
