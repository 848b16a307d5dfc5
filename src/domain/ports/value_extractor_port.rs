//! Port definition for single-key value extraction.

use std::borrow::Cow;

/// Extracts one key's string value from raw JSON document text.
///
/// The returned value is the raw JSON-escaped text between the value's
/// quotes; escape sequences are not decoded.
pub trait ValueExtractor: Send + Sync {
    /// Returns the value stored under `key`, or `None` if it is absent.
    fn extract<'a>(&self, document: &'a str, key: &str) -> Option<Cow<'a, str>>;
}
