//! Infrastructure layer with filesystem, cache, and configuration adapters.

/// Emoji asset extraction, loading, and conversion.
pub mod asset;
/// In-memory caching.
pub mod cache;
/// Application configuration.
pub mod config;

pub use asset::{EmojiConverter, FsDocumentSource, ParsingExtractor, ScanningExtractor};
pub use cache::RecencyCache;
pub use config::{AppConfig, CliArgs, Command, LogLevel, StorageManager};
