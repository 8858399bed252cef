//! Expiring Cache Module
//!
//! Thread-safe response cache whose entries are evicted by a background sweep
//! once they outlive the TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::{spawn_sweep_task, SweepHandle};

// == Expiring Cache ==
/// A concurrent key/value cache with a single TTL and a periodic sweeper.
///
/// Reads share a read lock; writes and sweeps take the write lock. `get` never
/// checks an entry's age, so an entry can remain readable for up to one extra
/// sweep period after it has nominally expired.
///
/// The sweep task lives exactly as long as the cache. Call
/// [`ExpiringCache::shutdown`] to stop it deterministically; dropping the
/// cache aborts it.
#[derive(Debug)]
pub struct ExpiringCache {
    store: Arc<RwLock<CacheStore>>,
    sweeper: SweepHandle,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweeper, ticking every `ttl`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let sweeper = spawn_sweep_task(store.clone(), ttl);
        debug!(?ttl, "Expiring cache created");

        Self { store, sweeper }
    }

    // == Add ==
    /// Inserts or replaces the payload for `key`, resetting its timestamp.
    pub async fn add(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        let key = key.into();
        let payload = payload.into();
        debug!(key = %key, bytes = payload.len(), "Cache add");

        self.store.write().await.add(key, payload);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let payload = self.store.read().await.get(key).map(<[u8]>::to_vec);
        debug!(key, hit = payload.is_some(), "Cache get");
        payload
    }

    // == TTL ==
    /// Returns the TTL, which is also the sweep period.
    pub async fn ttl(&self) -> Duration {
        self.store.read().await.ttl()
    }

    // == Length ==
    /// Returns the number of entries currently held.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the sweep task and waits for it to exit.
    pub async fn shutdown(self) {
        self.sweeper.stop().await;
    }
}
