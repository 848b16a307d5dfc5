//! Port definitions.

mod document_source_port;
mod emoji_lookup_port;
mod value_extractor_port;

pub use document_source_port::DocumentSource;
pub use emoji_lookup_port::EmojiLookup;
pub use value_extractor_port::ValueExtractor;
