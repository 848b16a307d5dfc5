//! Resolved emoji image surface handed to the application.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{Brand, CacheStats};
use crate::domain::errors::EmojiError;
use crate::infrastructure::config::AppConfig;

use super::{BrandAccessor, EmojiCacheService};

/// Initialized emoji service with one accessor per configured brand.
#[derive(Debug, Clone)]
pub struct EmojiImages {
    service: Arc<EmojiCacheService>,
    accessors: BTreeMap<Brand, BrandAccessor>,
}

impl EmojiImages {
    /// Builds the service from configuration and initializes it.
    ///
    /// # Errors
    /// Returns error if a brand document cannot be read.
    pub async fn open(config: &AppConfig) -> Result<Self, EmojiError> {
        Self::from_service(Arc::new(EmojiCacheService::from_config(config))).await
    }

    /// Initializes an existing service and exposes its brands.
    ///
    /// # Errors
    /// Returns error if the service fails to initialize.
    pub async fn from_service(service: Arc<EmojiCacheService>) -> Result<Self, EmojiError> {
        service.init().await?;
        let accessors = service
            .brands()
            .iter()
            .map(|brand| {
                (
                    brand.clone(),
                    BrandAccessor::new(brand.clone(), service.clone()),
                )
            })
            .collect();
        Ok(Self { service, accessors })
    }

    /// Returns the accessor for a configured brand.
    #[must_use]
    pub fn brand(&self, name: &str) -> Option<&BrandAccessor> {
        self.accessors.get(name)
    }

    /// Returns the configured brand names.
    pub fn brands(&self) -> impl Iterator<Item = &Brand> {
        self.accessors.keys()
    }

    /// Returns a snapshot of the lookup statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.service.stats()
    }

    /// Empties the lookup cache.
    pub fn clear_cache(&self) {
        self.service.clear_cache();
    }
}
