//! Codepoint lookup keys.

use super::Brand;

/// Canonical lookup key into an emoji document.
///
/// Keys are lowercase hex codepoints, with `-` or `_` joining the parts of a
/// sequence (`1f468-200d-1f469`). Canonicalization only trims and lowercases,
/// so any input is accepted and simply fails to match if it is not a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodepointKey(String);

impl CodepointKey {
    /// Canonicalizes a raw codepoint string.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_ascii_lowercase())
    }

    /// Returns the canonical key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CodepointKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CodepointKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Cache key namespacing a codepoint under its brand (`brand:unicode`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds the composite key for a brand and codepoint.
    #[must_use]
    pub fn new(brand: &Brand, codepoint: &CodepointKey) -> Self {
        Self(format!("{brand}:{codepoint}"))
    }

    /// Returns the composite key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
