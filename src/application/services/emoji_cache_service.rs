//! Emoji lookup orchestration.
//!
//! Loads every configured brand document into memory once, preloads the
//! popular codepoints, then answers lookups from the recency cache, falling
//! back to single-key extraction on a miss.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, error, info, trace, warn};

use crate::domain::entities::{Brand, CacheKey, CacheStats, CodepointKey, RequestCounters};
use crate::domain::errors::EmojiError;
use crate::domain::ports::{DocumentSource, ValueExtractor};
use crate::infrastructure::asset::{FsDocumentSource, ScanningExtractor};
use crate::infrastructure::cache::RecencyCache;
use crate::infrastructure::config::AppConfig;

/// Lifecycle of the emoji cache service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceState {
    /// `init()` has not run, or failed.
    #[default]
    Uninitialized,
    /// Documents are being loaded and preloaded.
    Initializing,
    /// Lookups are served.
    Ready,
}

/// Codepoints warmed into the cache during `init()`.
#[derive(Debug, Clone)]
pub struct PreloadPlan {
    /// Brand the codepoints are looked up for.
    pub brand: Brand,
    /// Canonical codepoints, duplicates removed.
    pub codepoints: Vec<CodepointKey>,
}

impl PreloadPlan {
    /// Builds a plan, canonicalizing and de-duplicating codepoints.
    #[must_use]
    pub fn new<S: AsRef<str>>(brand: impl Into<Brand>, codepoints: &[S]) -> Self {
        let mut keys: Vec<CodepointKey> = Vec::with_capacity(codepoints.len());
        for raw in codepoints {
            let key = CodepointKey::new(raw.as_ref());
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        Self {
            brand: brand.into(),
            codepoints: keys,
        }
    }

    /// A plan that preloads nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            brand: Brand::new("apple"),
            codepoints: Vec::new(),
        }
    }
}

/// Cache entries and counters, updated together under one lock.
struct Ledger {
    entries: RecencyCache,
    counters: RequestCounters,
}

/// Serves base64 emoji images per brand with a bounded cache.
pub struct EmojiCacheService {
    source: Arc<dyn DocumentSource>,
    extractor: Arc<dyn ValueExtractor>,
    brands: Vec<Brand>,
    preload: PreloadPlan,
    state: RwLock<ServiceState>,
    documents: RwLock<HashMap<Brand, Arc<str>>>,
    ledger: Mutex<Ledger>,
    init_lock: tokio::sync::Mutex<()>,
}

impl std::fmt::Debug for EmojiCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiCacheService")
            .field("brands", &self.brands)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl EmojiCacheService {
    /// Creates an uninitialized service.
    #[must_use]
    pub fn new(
        source: Arc<dyn DocumentSource>,
        extractor: Arc<dyn ValueExtractor>,
        brands: Vec<Brand>,
        capacity: usize,
        preload: PreloadPlan,
    ) -> Self {
        Self {
            source,
            extractor,
            brands,
            preload,
            state: RwLock::new(ServiceState::Uninitialized),
            documents: RwLock::new(HashMap::new()),
            ledger: Mutex::new(Ledger {
                entries: RecencyCache::new(capacity),
                counters: RequestCounters::default(),
            }),
            init_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Creates a service reading documents from the configured assets directory.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let files = config.brand_files();
        let brands = files.keys().cloned().collect();
        let source = FsDocumentSource::new(config.assets_dir.clone(), files);
        let extractor = ScanningExtractor::new(config.cache.full_parse_fallback);
        let preload = PreloadPlan::new(
            config.preload.brand.as_str(),
            config.preload.codepoints.as_slice(),
        );

        Self::new(
            Arc::new(source),
            Arc::new(extractor),
            brands,
            config.cache.capacity,
            preload,
        )
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ServiceState {
        *self.state.read()
    }

    /// Returns the configured brands.
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    #[cfg(test)]
    fn has_document(&self, brand: &str) -> bool {
        self.documents.read().contains_key(brand)
    }

    /// Loads brand documents and preloads popular emojis.
    /// Calling it again once ready does nothing.
    ///
    /// # Errors
    /// Returns error if a document exists but cannot be read; the service
    /// then stays uninitialized.
    pub async fn init(&self) -> Result<(), EmojiError> {
        let _guard = self.init_lock.lock().await;
        if self.state() == ServiceState::Ready {
            return Ok(());
        }
        *self.state.write() = ServiceState::Initializing;

        let mut documents = HashMap::with_capacity(self.brands.len());
        for brand in &self.brands {
            match self.source.load(brand).await {
                Ok(Some(document)) => {
                    info!(brand = %brand, "Emoji cache initialized for brand");
                    documents.insert(brand.clone(), document);
                }
                Ok(None) => warn!(brand = %brand, "No emoji document, brand disabled"),
                Err(e) => {
                    error!(brand = %brand, error = %e, "Failed to initialize emoji cache");
                    *self.state.write() = ServiceState::Uninitialized;
                    return Err(e);
                }
            }
        }
        *self.documents.write() = documents;

        self.preload_popular_emojis();
        *self.state.write() = ServiceState::Ready;
        Ok(())
    }

    /// Warms the cache with the configured popular codepoints.
    /// Preload lookups are not counted in the stats. Returns how many were cached.
    pub fn preload_popular_emojis(&self) -> usize {
        let plan = &self.preload;
        if plan.codepoints.is_empty() {
            return 0;
        }
        info!(
            brand = %plan.brand,
            count = plan.codepoints.len(),
            "Preloading popular emojis"
        );

        let Some(document) = self.document(&plan.brand) else {
            warn!(brand = %plan.brand, "Could not preload popular emojis, no document");
            return 0;
        };

        let mut preloaded = 0;
        for codepoint in &plan.codepoints {
            match self.extract(&document, codepoint) {
                Some(value) => {
                    self.ledger
                        .lock()
                        .entries
                        .put(CacheKey::new(&plan.brand, codepoint), value);
                    preloaded += 1;
                }
                None => debug!(key = %codepoint, "Popular emoji missing from document"),
            }
        }

        info!(
            preloaded,
            total = plan.codepoints.len(),
            "Preloaded popular emojis"
        );
        preloaded
    }

    /// Looks up the base64 image for a codepoint.
    ///
    /// Returns `Ok(None)` if the brand has no document or the codepoint is
    /// not in it.
    ///
    /// # Errors
    /// Returns `EmojiError::NotInitialized` before `init()` has completed.
    pub fn get_emoji(&self, brand: &str, unicode: &str) -> Result<Option<Arc<str>>, EmojiError> {
        if self.state() != ServiceState::Ready {
            return Err(EmojiError::NotInitialized);
        }

        let brand = Brand::new(brand);
        let codepoint = CodepointKey::new(unicode);
        let key = CacheKey::new(&brand, &codepoint);

        {
            let mut ledger = self.ledger.lock();
            if let Some(value) = ledger.entries.get(&key) {
                ledger.counters.record_hit();
                trace!(key = %key, "Emoji cache hit");
                return Ok(Some(value));
            }
            ledger.counters.record_miss();
        }
        trace!(key = %key, "Emoji cache miss");

        let Some(document) = self.document(&brand) else {
            debug!(brand = %brand, "No document for brand");
            return Ok(None);
        };
        let Some(value) = self.extract(&document, &codepoint) else {
            return Ok(None);
        };

        self.ledger.lock().entries.put(key, value.clone());
        Ok(Some(value))
    }

    /// Returns a snapshot of the lookup statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let ledger = self.ledger.lock();
        CacheStats::new(
            ledger.counters,
            ledger.entries.len(),
            ledger.entries.capacity(),
        )
    }

    /// Empties the cache. Stats and loaded documents are kept.
    pub fn clear_cache(&self) {
        self.ledger.lock().entries.clear();
        info!("Emoji cache cleared");
    }

    fn document(&self, brand: &Brand) -> Option<Arc<str>> {
        self.documents.read().get(brand).cloned()
    }

    /// Empty payloads are not images and count as absent.
    fn extract(&self, document: &str, codepoint: &CodepointKey) -> Option<Arc<str>> {
        self.extractor
            .extract(document, codepoint.as_str())
            .filter(|value| !value.is_empty())
            .map(|value| Arc::from(value.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockDocumentSource;

    const FIXTURE: &str = r#"{"2764":"QkFTRTY0","1f600":"QkFTRTY0Mg=="}"#;

    fn service_with(
        source: MockDocumentSource,
        capacity: usize,
        preload: PreloadPlan,
    ) -> EmojiCacheService {
        EmojiCacheService::new(
            Arc::new(source),
            Arc::new(ScanningExtractor::default()),
            vec![Brand::new("apple")],
            capacity,
            preload,
        )
    }

    async fn ready_service(capacity: usize) -> EmojiCacheService {
        let source = MockDocumentSource::new().with_document("apple", FIXTURE);
        let service = service_with(source, capacity, PreloadPlan::empty());
        service.init().await.unwrap();
        service
    }

    #[tokio::test]
    async fn test_lookup_end_to_end() {
        let service = ready_service(200).await;

        assert_eq!(
            service.get_emoji("apple", "2764").unwrap().as_deref(),
            Some("QkFTRTY0")
        );
        assert!(service.get_emoji("apple", "ffff").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_repeat_lookup_is_a_hit() {
        let service = ready_service(200).await;

        let _ = service.get_emoji("apple", "2764").unwrap();
        let _ = service.get_emoji("apple", "2764").unwrap();

        let stats = service.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.cache_size, 1);
    }

    #[tokio::test]
    async fn test_lookup_before_init_fails() {
        let source = MockDocumentSource::new().with_document("apple", FIXTURE);
        let service = service_with(source, 10, PreloadPlan::empty());

        assert_eq!(service.state(), ServiceState::Uninitialized);
        assert!(matches!(
            service.get_emoji("apple", "2764"),
            Err(EmojiError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let source = Arc::new(MockDocumentSource::new().with_document("apple", FIXTURE));
        let service = EmojiCacheService::new(
            source.clone(),
            Arc::new(ScanningExtractor::default()),
            vec![Brand::new("apple")],
            10,
            PreloadPlan::empty(),
        );

        service.init().await.unwrap();
        service.init().await.unwrap();

        assert_eq!(service.state(), ServiceState::Ready);
        assert_eq!(source.load_count(), 1);
    }

    #[tokio::test]
    async fn test_init_failure_is_surfaced() {
        let source = MockDocumentSource::new().failing_on("apple");
        let service = service_with(source, 10, PreloadPlan::empty());

        let result = service.init().await;
        assert!(matches!(result, Err(EmojiError::DocumentRead { .. })));
        assert_eq!(service.state(), ServiceState::Uninitialized);
    }

    #[tokio::test]
    async fn test_missing_document_degrades_to_absent() {
        let service = service_with(MockDocumentSource::new(), 10, PreloadPlan::empty());
        service.init().await.unwrap();

        assert_eq!(service.state(), ServiceState::Ready);
        assert!(!service.has_document("apple"));
        assert!(service.get_emoji("apple", "2764").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_brand_is_absent() {
        let service = ready_service(10).await;
        assert!(service.get_emoji("google", "2764").unwrap().is_none());
        assert_eq!(service.stats().misses, 1);
    }

    #[tokio::test]
    async fn test_absent_key_does_not_touch_cache() {
        let service = ready_service(10).await;

        assert!(service.get_emoji("apple", "ffff").unwrap().is_none());
        assert!(service.get_emoji("apple", "ffff").unwrap().is_none());

        let stats = service.stats();
        assert_eq!(stats.cache_size, 0);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.hits, 0);
    }

    #[tokio::test]
    async fn test_lookup_canonicalizes_codepoint() {
        let document = r#"{"26a0":"V0FSTg=="}"#;
        let service = service_with(
            MockDocumentSource::new().with_document("apple", document),
            10,
            PreloadPlan::empty(),
        );
        service.init().await.unwrap();

        assert_eq!(
            service.get_emoji("apple", "26A0").unwrap().as_deref(),
            Some("V0FSTg==")
        );
        assert!(service.get_emoji("apple", "26a0").unwrap().is_some());
        assert_eq!(service.stats().hits, 1);
    }

    #[tokio::test]
    async fn test_escapes_are_returned_verbatim() {
        let document = r#"{"a":"x\"y\\z"}"#;
        let service = service_with(
            MockDocumentSource::new().with_document("apple", document),
            10,
            PreloadPlan::empty(),
        );
        service.init().await.unwrap();

        assert_eq!(
            service.get_emoji("apple", "a").unwrap().as_deref(),
            Some(r#"x\"y\\z"#)
        );
    }

    #[tokio::test]
    async fn test_empty_value_is_absent_and_not_cached() {
        let document = r#"{"a":"","b":"Qg=="}"#;
        let service = service_with(
            MockDocumentSource::new().with_document("apple", document),
            10,
            PreloadPlan::new("apple", &["a"]),
        );
        service.init().await.unwrap();
        assert_eq!(service.stats().cache_size, 0);

        assert!(service.get_emoji("apple", "a").unwrap().is_none());
        assert_eq!(service.stats().cache_size, 0);
        assert_eq!(
            service.get_emoji("apple", "b").unwrap().as_deref(),
            Some("Qg==")
        );
    }

    #[tokio::test]
    async fn test_non_string_value_is_absent_and_not_cached() {
        let document = r#"{"a":1,"b":"Qg=="}"#;
        let service = service_with(
            MockDocumentSource::new().with_document("apple", document),
            10,
            PreloadPlan::empty(),
        );
        service.init().await.unwrap();

        assert!(service.get_emoji("apple", "a").unwrap().is_none());
        assert_eq!(service.stats().cache_size, 0);
    }

    #[tokio::test]
    async fn test_capacity_plus_one_lookups_evict_oldest() {
        let document = r#"{"a":"QQ==","b":"Qg==","c":"Qw=="}"#;
        let service = service_with(
            MockDocumentSource::new().with_document("apple", document),
            2,
            PreloadPlan::empty(),
        );
        service.init().await.unwrap();

        let _ = service.get_emoji("apple", "a").unwrap();
        let _ = service.get_emoji("apple", "b").unwrap();
        let _ = service.get_emoji("apple", "a").unwrap();
        let _ = service.get_emoji("apple", "c").unwrap();
        assert_eq!(service.stats().cache_size, 2);

        let before = service.stats();
        let _ = service.get_emoji("apple", "a").unwrap();
        let _ = service.get_emoji("apple", "c").unwrap();
        let after = service.stats();
        assert_eq!(after.hits - before.hits, 2);

        let _ = service.get_emoji("apple", "b").unwrap();
        assert_eq!(service.stats().misses, after.misses + 1);
    }

    #[tokio::test]
    async fn test_preloaded_emoji_is_first_call_hit() {
        let source = MockDocumentSource::new().with_document("apple", FIXTURE);
        let service = service_with(source, 200, PreloadPlan::new("apple", &["2764", "26A0"]));
        service.init().await.unwrap();

        let stats = service.stats();
        assert_eq!(stats.cache_size, 1);
        assert_eq!(stats.total_requests, 0);

        assert!(service.get_emoji("apple", "2764").unwrap().is_some());
        let stats = service.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
    }

    #[tokio::test]
    async fn test_preload_without_document_is_swallowed() {
        let source = MockDocumentSource::new().with_document("apple", FIXTURE);
        let service = service_with(source, 200, PreloadPlan::new("google", &["2764"]));

        service.init().await.unwrap();
        assert_eq!(service.state(), ServiceState::Ready);
        assert_eq!(service.stats().cache_size, 0);
    }

    #[test]
    fn test_preload_plan_deduplicates() {
        let plan = PreloadPlan::new("apple", &["2665", "26A0", "2665", "26a0"]);
        assert_eq!(plan.codepoints.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_cache_keeps_stats() {
        let service = ready_service(10).await;
        let _ = service.get_emoji("apple", "2764").unwrap();
        let _ = service.get_emoji("apple", "2764").unwrap();
        let before = service.stats();

        service.clear_cache();

        let after = service.stats();
        assert_eq!(after.cache_size, 0);
        assert_eq!(after.hits, before.hits);
        assert_eq!(after.misses, before.misses);
        assert_eq!(after.total_requests, before.total_requests);
        assert!(service.get_emoji("apple", "2764").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_counters_balance_under_concurrent_lookups() {
        let service = Arc::new(ready_service(1).await);
        let mut handles = Vec::new();
        for i in 0..8 {
            let service = service.clone();
            handles.push(std::thread::spawn(move || {
                for j in 0..50 {
                    let key = if (i + j) % 2 == 0 { "2764" } else { "1f600" };
                    let _ = service.get_emoji("apple", key).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = service.stats();
        assert_eq!(stats.total_requests, 400);
        assert_eq!(stats.hits + stats.misses, stats.total_requests);
        assert!(stats.cache_size <= 1);
    }
}
