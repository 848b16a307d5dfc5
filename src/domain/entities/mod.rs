//! Domain entity definitions.

mod brand;
mod cache_stats;
mod codepoint;

pub use brand::Brand;
pub use cache_stats::{CacheStats, RequestCounters};
pub use codepoint::{CacheKey, CodepointKey};
