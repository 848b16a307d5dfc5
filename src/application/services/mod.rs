//! Application services.

/// Per-brand lookup view.
pub mod brand_accessor;
/// Cache orchestration.
pub mod emoji_cache_service;
/// Resolved service surface.
pub mod emoji_images;

pub use brand_accessor::BrandAccessor;
pub use emoji_cache_service::{EmojiCacheService, PreloadPlan, ServiceState};
pub use emoji_images::EmojiImages;
