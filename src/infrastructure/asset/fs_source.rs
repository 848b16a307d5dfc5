//! Filesystem-backed emoji document source.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::domain::entities::Brand;
use crate::domain::errors::EmojiError;
use crate::domain::ports::DocumentSource;

/// Reads `<assets_dir>/<file>` for each configured brand.
pub struct FsDocumentSource {
    assets_dir: PathBuf,
    files: BTreeMap<Brand, String>,
}

impl FsDocumentSource {
    /// Creates a source mapping brands to file names inside `assets_dir`.
    #[must_use]
    pub fn new(assets_dir: PathBuf, files: BTreeMap<Brand, String>) -> Self {
        Self { assets_dir, files }
    }

    /// Returns the document path for a brand, if the brand is configured.
    #[must_use]
    pub fn document_path(&self, brand: &Brand) -> Option<PathBuf> {
        self.files.get(brand).map(|file| self.assets_dir.join(file))
    }
}

#[async_trait]
impl DocumentSource for FsDocumentSource {
    async fn load(&self, brand: &Brand) -> Result<Option<Arc<str>>, EmojiError> {
        let Some(path) = self.document_path(brand) else {
            debug!(brand = %brand, "No document configured for brand");
            return Ok(None);
        };

        let exists = fs::try_exists(&path)
            .await
            .map_err(|e| EmojiError::document_read(&path, e))?;
        if !exists {
            warn!(brand = %brand, path = %path.display(), "Emoji document not found");
            return Ok(None);
        }

        match fs::read_to_string(&path).await {
            Ok(content) => {
                info!(
                    brand = %brand,
                    path = %path.display(),
                    size = content.len(),
                    "Loaded emoji document"
                );
                Ok(Some(Arc::from(content)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(brand = %brand, path = %path.display(), "Emoji document not found");
                Ok(None)
            }
            Err(e) => Err(EmojiError::document_read(path, e)),
        }
    }
}
