//! In-memory caching.

/// Bounded recency cache.
pub mod recency_cache;

pub use recency_cache::{DEFAULT_CACHE_CAPACITY, RecencyCache};
