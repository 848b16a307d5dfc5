//! Emoji lookup error types.

use std::path::PathBuf;

use thiserror::Error;

/// Emoji cache and asset error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum EmojiError {
    #[error("emoji cache not initialized, call init() first")]
    NotInitialized,

    #[error("failed to read emoji document {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("emoji conversion failed at {}: {source}", .path.display())]
    Conversion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode emoji document: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl EmojiError {
    /// Creates document read error.
    #[must_use]
    pub fn document_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DocumentRead {
            path: path.into(),
            source,
        }
    }

    /// Creates conversion error.
    #[must_use]
    pub fn conversion(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Conversion {
            path: path.into(),
            source,
        }
    }
}
