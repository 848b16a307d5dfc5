//! Domain error types.

mod emoji_error;

pub use emoji_error::EmojiError;
