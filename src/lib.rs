//! Emoji Vault - low-latency base64 emoji image lookups.
//!
//! This crate serves per-brand emoji images from flat JSON assets, using
//! single-key extraction, a bounded recency cache, and a startup preload of
//! popular codepoints.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the lookup services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing asset, cache, and config adapters.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "emoji-vault";
