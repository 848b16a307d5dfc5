//! Port definition for per-brand emoji lookups.

use std::sync::Arc;

/// Read-only view of one brand's emoji images.
pub trait EmojiLookup: Send + Sync {
    /// Returns the base64 image for a codepoint, or `None`.
    /// Never fails, whatever the key.
    fn lookup(&self, unicode: &str) -> Option<Arc<str>>;
}
