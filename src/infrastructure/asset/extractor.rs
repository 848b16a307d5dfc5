//! Single-key value extraction from raw emoji documents.
//!
//! The scanning extractor finds `"<key>":` by substring search and reads the
//! following string literal, so a lookup never parses or allocates the whole
//! document. It assumes unique keys and a flat object of string values.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::value::RawValue;
use tracing::{debug, warn};

use crate::domain::ports::ValueExtractor;

/// Outcome of scanning for a key's string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan<'a> {
    /// The value ended with an unescaped quote.
    Terminated(&'a str),
    /// The document ended before the closing quote; holds the tail.
    Unterminated(&'a str),
    /// Something other than a string literal follows the key.
    NotAString,
}

/// Substring-scanning extractor with an optional full-parse fallback.
#[derive(Debug, Clone, Copy)]
pub struct ScanningExtractor {
    full_parse_fallback: bool,
}

impl ScanningExtractor {
    /// Creates an extractor; `full_parse_fallback` re-checks unterminated
    /// and non-string values against a full parse of the document.
    #[must_use]
    pub const fn new(full_parse_fallback: bool) -> Self {
        Self {
            full_parse_fallback,
        }
    }

    /// Locates the first `"<key>":` and scans the string literal after it.
    #[must_use]
    pub fn scan<'a>(document: &'a str, key: &str) -> Option<Scan<'a>> {
        let pattern = format!("\"{key}\":");
        let value_start = document.find(&pattern)? + pattern.len();
        let rest = document[value_start..].trim_start();
        if rest.chars().next()? != '"' {
            return Some(Scan::NotAString);
        }
        let open = document.len() - rest.len() + 1;

        let bytes = document.as_bytes();
        let mut escape_next = false;
        for (offset, &byte) in bytes[open..].iter().enumerate() {
            if escape_next {
                escape_next = false;
            } else if byte == b'\\' {
                escape_next = true;
            } else if byte == b'"' {
                return Some(Scan::Terminated(&document[open..open + offset]));
            }
        }

        Some(Scan::Unterminated(&document[open..]))
    }
}

impl Default for ScanningExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ValueExtractor for ScanningExtractor {
    fn extract<'a>(&self, document: &'a str, key: &str) -> Option<Cow<'a, str>> {
        match Self::scan(document, key)? {
            Scan::Terminated(value) => Some(Cow::Borrowed(value)),
            Scan::Unterminated(tail) => {
                if self.full_parse_fallback
                    && let Some(parsed) = ParsingExtractor::parse(document)
                {
                    debug!(key, "Unterminated value, using full parse result");
                    return ParsingExtractor::lookup(&parsed, key).map(Cow::Borrowed);
                }
                warn!(key, len = tail.len(), "Unterminated value in emoji document");
                Some(Cow::Borrowed(tail))
            }
            Scan::NotAString => {
                if self.full_parse_fallback
                    && let Some(parsed) = ParsingExtractor::parse(document)
                {
                    debug!(key, "Non-string value, using full parse result");
                    return ParsingExtractor::lookup(&parsed, key).map(Cow::Borrowed);
                }
                warn!(key, "Non-string value in emoji document");
                None
            }
        }
    }
}

/// Extractor that fully parses the document on every call.
///
/// Slower than scanning but independent of key order and formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParsingExtractor;

impl ParsingExtractor {
    fn parse(document: &str) -> Option<HashMap<String, &RawValue>> {
        match serde_json::from_str(document) {
            Ok(map) => Some(map),
            Err(e) => {
                debug!(error = %e, "Emoji document is not a flat JSON object");
                None
            }
        }
    }

    fn lookup<'a>(map: &HashMap<String, &'a RawValue>, key: &str) -> Option<&'a str> {
        let raw: &'a RawValue = *map.get(key)?;
        raw.get()
            .strip_prefix('"')
            .and_then(|raw| raw.strip_suffix('"'))
    }
}

impl ValueExtractor for ParsingExtractor {
    fn extract<'a>(&self, document: &'a str, key: &str) -> Option<Cow<'a, str>> {
        let map = Self::parse(document)?;
        Self::lookup(&map, key).map(Cow::Borrowed)
    }
}
