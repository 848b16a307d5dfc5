//! Port definition for emoji document retrieval.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::Brand;
use crate::domain::errors::EmojiError;

/// Port for reading a brand's emoji document.
/// Implementations must be thread-safe.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Reads the full document text for a brand.
    ///
    /// Returns `Ok(None)` when the brand has no document; unexpected I/O
    /// failures are errors.
    async fn load(&self, brand: &Brand) -> Result<Option<Arc<str>>, EmojiError>;
}
