//! Bounded recency cache for extracted emoji payloads.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tracing::{debug, trace};

use crate::domain::entities::CacheKey;

/// Default maximum number of emojis to keep in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = 200;

/// Fixed-capacity map from `brand:unicode` to base64 payload.
///
/// A hit moves the entry to the most-recent position, and a full cache drops
/// the entry least recently (re-)inserted before accepting a new one.
/// Not synchronized; callers wrap it in a lock.
pub struct RecencyCache {
    entries: LruCache<CacheKey, Arc<str>>,
}

impl RecencyCache {
    /// Creates a new cache with the specified capacity.
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
        }
    }

    /// Looks up a payload, promoting it to most recent on a hit.
    pub fn get(&mut self, key: &CacheKey) -> Option<Arc<str>> {
        let value = self.entries.get(key).cloned();
        trace!(key = %key, hit = value.is_some(), "Recency cache lookup");
        value
    }

    #[cfg(test)]
    fn peek(&self, key: &CacheKey) -> Option<Arc<str>> {
        self.entries.peek(key).cloned()
    }

    /// Stores a payload, evicting the oldest entry if the cache is full.
    pub fn put(&mut self, key: CacheKey, value: Arc<str>) {
        if let Some((evicted, _)) = self.entries.push(key, value)
            && self.entries.peek(&evicted).is_none()
        {
            debug!(key = %evicted, "Evicted emoji from recency cache");
        }
    }

    #[cfg(test)]
    fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains(key)
    }

    /// Returns the current number of cached emojis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of cached emojis.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
