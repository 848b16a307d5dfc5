//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Brand, CacheStats, CodepointKey};
pub use errors::EmojiError;
pub use ports::{DocumentSource, EmojiLookup, ValueExtractor};
