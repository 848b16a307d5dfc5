//! Brand (icon set) identifier.

/// Name of an emoji icon set such as `apple`.
/// Each brand owns one document and its own cache namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Brand(String);

impl Brand {
    /// Creates a new `Brand` from any string-like input.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Brand {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Brand {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for Brand {
    fn borrow(&self) -> &str {
        &self.0
    }
}
