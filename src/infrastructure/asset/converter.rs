//! Batch conversion of an emoji image directory into a JSON asset.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use tokio::fs;
use tracing::{debug, info};

use crate::domain::errors::EmojiError;

static EMOJI_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^emoji_u([0-9a-fA-F\-_]+)\.png$").unwrap());

/// Converts `emoji_u<codepoints>.png` files into a codepoint → base64 map.
pub struct EmojiConverter;

impl EmojiConverter {
    /// Returns the lookup key encoded in an image file name.
    #[must_use]
    pub fn key_from_file_name(file_name: &str) -> Option<String> {
        EMOJI_FILE_RE
            .captures(file_name)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_ascii_lowercase())
    }

    /// Reads every matching image in `dir` and base64-encodes it.
    ///
    /// # Errors
    /// Returns error if the directory or one of its images cannot be read.
    pub async fn collect(dir: &Path) -> Result<BTreeMap<String, String>, EmojiError> {
        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|e| EmojiError::conversion(dir, e))?;
        let mut emojis = BTreeMap::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| EmojiError::conversion(dir, e))?
        {
            let file_name = entry.file_name();
            let Some(key) = file_name.to_str().and_then(Self::key_from_file_name) else {
                debug!(file = ?file_name, "Skipping non-emoji file");
                continue;
            };

            let path = entry.path();
            let bytes = fs::read(&path)
                .await
                .map_err(|e| EmojiError::conversion(&path, e))?;
            emojis.insert(key, STANDARD.encode(bytes));
        }

        Ok(emojis)
    }

    /// Converts `dir` and writes the pretty-printed JSON map to `output`.
    /// Returns the number of converted emojis.
    ///
    /// # Errors
    /// Returns error if reading the images or writing the output fails.
    pub async fn convert(dir: &Path, output: &Path) -> Result<usize, EmojiError> {
        let emojis = Self::collect(dir).await?;
        let json = serde_json::to_string_pretty(&emojis)?;

        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| EmojiError::conversion(parent, e))?;
        }
        fs::write(output, json)
            .await
            .map_err(|e| EmojiError::conversion(output, e))?;

        info!(
            count = emojis.len(),
            output = %output.display(),
            "Converted emoji images"
        );
        Ok(emojis.len())
    }
}
