//! Emoji asset handling.
//!
//! This module provides:
//! - Single-key extraction from raw JSON documents
//! - Filesystem document loading
//! - Directory to JSON asset conversion

/// Directory to JSON conversion.
pub mod converter;
/// Single-key value extraction.
pub mod extractor;
/// Filesystem document source.
pub mod fs_source;

pub use converter::EmojiConverter;
pub use extractor::{ParsingExtractor, Scan, ScanningExtractor};
pub use fs_source::FsDocumentSource;
