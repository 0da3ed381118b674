//! Thumbnail cache
//!
//! Rendered first-page JPEGs keyed by document fingerprint. A thumbnail can
//! only be produced for a document already present in the [`DocumentCache`].

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::RwLock;

use crate::archive::{ArchiveError, ArchiveResult};
use crate::fingerprint::Fingerprint;
use crate::pdf::{encode_jpeg, PdfEngine, DEFAULT_JPEG_QUALITY};

use super::documents::DocumentCache;

/// Default render resolution of thumbnails
pub const DEFAULT_THUMBNAIL_DPI: f32 = 300.0;

/// Render parameters shared by every thumbnail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailSettings {
    pub dpi: f32,
    pub jpeg_quality: u8,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_THUMBNAIL_DPI,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Thread-safe fingerprint → JPEG map with lazy rendering
#[derive(Clone)]
pub struct ThumbnailCache {
    thumbnails: Arc<RwLock<HashMap<Fingerprint, Bytes>>>,
    engine: Arc<dyn PdfEngine>,
    settings: ThumbnailSettings,
}

impl ThumbnailCache {
    pub fn new(engine: Arc<dyn PdfEngine>, settings: ThumbnailSettings) -> Self {
        Self {
            thumbnails: Arc::new(RwLock::new(HashMap::new())),
            engine,
            settings,
        }
    }

    /// Get a cached thumbnail
    pub async fn lookup(&self, id: Fingerprint) -> Option<Bytes> {
        let thumbnails = self.thumbnails.read().await;
        thumbnails.get(&id).cloned()
    }

    /// Return the thumbnail of `id`, rendering and caching it on first use
    ///
    /// Fails with [`ArchiveError::UnknownDocument`] without any PDF I/O when
    /// the document has not been listed yet. Render and encode failures are
    /// not cached, the next request retries.
    pub async fn get_or_render(
        &self,
        id: Fingerprint,
        documents: &DocumentCache,
    ) -> ArchiveResult<Bytes> {
        if let Some(data) = self.lookup(id).await {
            return Ok(data);
        }

        let record = documents
            .lookup(id)
            .await
            .ok_or(ArchiveError::UnknownDocument(id))?;

        tracing::debug!("Rendering thumbnail of {}", record.path.display());
        let engine = Arc::clone(&self.engine);
        let settings = self.settings;
        let path = record.path.clone();
        let data = tokio::task::spawn_blocking(move || {
            let doc = engine.open(&path).map_err(|e| ArchiveError::pdf(&path, e))?;
            let image = doc
                .page(0)
                .and_then(|page| page.render(settings.dpi))
                .map_err(|e| ArchiveError::pdf(&path, e))?;
            encode_jpeg(&image, settings.jpeg_quality).map_err(|e| ArchiveError::pdf(&path, e))
        })
        .await??;

        let data = Bytes::from(data);
        {
            let mut thumbnails = self.thumbnails.write().await;
            thumbnails.insert(id, data.clone());
        }
        tracing::debug!(
            "Cached thumbnail of {} ({} bytes)",
            record.path.display(),
            data.len()
        );

        Ok(data)
    }

    pub async fn len(&self) -> usize {
        self.thumbnails.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.thumbnails.read().await.is_empty()
    }
}
