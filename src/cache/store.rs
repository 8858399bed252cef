//! Cache Store Module
//!
//! Synchronous storage engine behind the expiring cache: a HashMap of entries
//! plus the full-scan sweep that evicts anything older than the TTL.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key/value storage with a single, store-wide TTL.
///
/// The store itself never enforces freshness on reads. Stale entries stay
/// visible until [`CacheStore::sweep`] removes them.
#[derive(Debug)]
pub struct CacheStore {
    /// Entries keyed by request URL
    entries: HashMap<String, CacheEntry>,
    /// Maximum age before an entry becomes eligible for eviction
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamping it with the current instant.
    pub fn add(&mut self, key: String, payload: Vec<u8>) {
        self.insert(key, CacheEntry::new(payload));
    }

    /// Inserts a prebuilt entry, replacing any previous one for `key`.
    pub fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Returns the payload stored under `key`, regardless of its age.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(|entry| entry.payload.as_slice())
    }

    // == Sweep ==
    /// Removes every entry whose age at `now` exceeds the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_stale(now, ttl));
        before - self.entries.len()
    }

    // == TTL ==
    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(500);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new(TTL);

        store.add("https://example.com".to_string(), b"testdata".to_vec());

        assert_eq!(store.get("https://example.com"), Some(&b"testdata"[..]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_missing() {
        let store = CacheStore::new(TTL);
        assert!(store.get("https://example.com/never-added").is_none());
    }

    #[test]
    fn test_store_replace_updates_payload_and_timestamp() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();
        let key = "https://example.com/path".to_string();

        store.insert(key.clone(), CacheEntry::created_at(b"a".to_vec(), start));
        store.insert(
            key.clone(),
            CacheEntry::created_at(b"b".to_vec(), start + Duration::from_millis(400)),
        );

        assert_eq!(store.get(&key), Some(&b"b"[..]));
        assert_eq!(store.len(), 1);

        // The first insert would be stale here, the replacement is not
        let removed = store.sweep(start + Duration::from_millis(600));
        assert_eq!(removed, 0);
        assert_eq!(store.get(&key), Some(&b"b"[..]));
    }

    #[test]
    fn test_store_get_does_not_check_age() {
        let mut store = CacheStore::new(TTL);
        let long_ago = Instant::now() - Duration::from_secs(60);

        store.insert("old".to_string(), CacheEntry::created_at(b"v".to_vec(), long_ago));

        assert_eq!(store.get("old"), Some(&b"v"[..]));
    }

    #[test]
    fn test_store_sweep_removes_only_stale() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.insert("stale".to_string(), CacheEntry::created_at(b"1".to_vec(), start));
        store.insert(
            "fresh".to_string(),
            CacheEntry::created_at(b"2".to_vec(), start + Duration::from_millis(300)),
        );

        let removed = store.sweep(start + Duration::from_millis(700));

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("stale").is_none());
        assert_eq!(store.get("fresh"), Some(&b"2"[..]));
    }

    #[test]
    fn test_store_sweep_empty() {
        let mut store = CacheStore::new(TTL);
        assert_eq!(store.sweep(Instant::now()), 0);
    }
}
