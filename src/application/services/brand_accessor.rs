//! Per-brand lookup view.

use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::Brand;
use crate::domain::ports::EmojiLookup;

use super::EmojiCacheService;

/// Lookup view for one brand, delegating to the shared cache service.
#[derive(Debug, Clone)]
pub struct BrandAccessor {
    brand: Brand,
    service: Arc<EmojiCacheService>,
}

impl BrandAccessor {
    /// Creates a view of `brand` backed by `service`.
    #[must_use]
    pub fn new(brand: Brand, service: Arc<EmojiCacheService>) -> Self {
        Self { brand, service }
    }

    /// Returns the brand this view reads.
    #[must_use]
    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    /// Codepoints cannot be enumerated; always empty.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::empty()
    }
}

impl EmojiLookup for BrandAccessor {
    fn lookup(&self, unicode: &str) -> Option<Arc<str>> {
        match self.service.get_emoji(self.brand.as_str(), unicode) {
            Ok(value) => value,
            Err(e) => {
                warn!(brand = %self.brand, key = unicode, error = %e, "Emoji lookup failed");
                None
            }
        }
    }
}
