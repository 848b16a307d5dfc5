//! Application layer with the emoji lookup services.

/// Service implementations.
pub mod services;

pub use services::{BrandAccessor, EmojiCacheService, EmojiImages, PreloadPlan, ServiceState};
