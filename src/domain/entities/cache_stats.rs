//! Lookup statistics.

use serde::Serialize;

/// Running request counters for the emoji cache.
///
/// Counters only ever grow; clearing the cache leaves them untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestCounters {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to consult the document.
    pub misses: u64,
    /// All lookups, `hits + misses`.
    pub total_requests: u64,
}

impl RequestCounters {
    /// Records a cache hit.
    pub fn record_hit(&mut self) {
        self.hits += 1;
        self.total_requests += 1;
    }

    /// Records a cache miss.
    pub fn record_miss(&mut self) {
        self.misses += 1;
        self.total_requests += 1;
    }
}

/// Snapshot of cache performance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Number of lookups served.
    pub total_requests: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Current number of cached emojis.
    pub cache_size: usize,
    /// Cache capacity.
    pub max_cache_size: usize,
}

impl CacheStats {
    /// Builds a snapshot from counters and cache occupancy.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(counters: RequestCounters, cache_size: usize, max_cache_size: usize) -> Self {
        let hit_rate = if counters.total_requests > 0 {
            (counters.hits as f64 / counters.total_requests as f64) * 100.0
        } else {
            0.0
        };
        Self {
            hits: counters.hits,
            misses: counters.misses,
            total_requests: counters.total_requests,
            hit_rate,
            cache_size,
            max_cache_size,
        }
    }
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {}/{} emojis, {:.1}% hit rate ({} hits, {} misses, {} requests)",
            self.cache_size,
            self.max_cache_size,
            self.hit_rate,
            self.hits,
            self.misses,
            self.total_requests
        )
    }
}
