//! Archive service
//!
//! Owns the scanner, the extractor and both caches. Constructed once per
//! process and shared by every request handler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::{self, StreamExt};

use crate::cache::{DocumentCache, ThumbnailCache, ThumbnailSettings};
use crate::fingerprint::Fingerprint;
use crate::pdf::PdfEngine;

use super::error::{ArchiveError, ArchiveResult};
use super::extract::MetadataExtractor;
use super::scanner::ArchiveScanner;
use super::types::{CategoryInfo, DocumentRecord};

/// Default number of documents extracted concurrently during a listing
pub const DEFAULT_EXTRACT_CONCURRENCY: usize = 4;

/// Service options
#[derive(Debug, Clone)]
pub struct ArchiveOptions {
    pub thumbnails: ThumbnailSettings,
    /// Upper bound on concurrent extractions in one listing
    pub extract_concurrency: usize,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            thumbnails: ThumbnailSettings::default(),
            extract_concurrency: DEFAULT_EXTRACT_CONCURRENCY,
        }
    }
}

/// Listing, aggregation and thumbnail access over one archive root
#[derive(Clone)]
pub struct ArchiveService {
    scanner: ArchiveScanner,
    extractor: MetadataExtractor,
    documents: DocumentCache,
    thumbnails: ThumbnailCache,
    extract_concurrency: usize,
}

impl ArchiveService {
    pub fn new(root: impl Into<PathBuf>, engine: Arc<dyn PdfEngine>, options: ArchiveOptions) -> Self {
        Self {
            scanner: ArchiveScanner::new(root),
            extractor: MetadataExtractor::new(Arc::clone(&engine)),
            documents: DocumentCache::new(),
            thumbnails: ThumbnailCache::new(engine, options.thumbnails),
            extract_concurrency: options.extract_concurrency.max(1),
        }
    }

    pub fn root(&self) -> &Path {
        self.scanner.root()
    }

    pub fn documents(&self) -> &DocumentCache {
        &self.documents
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    /// Extract (or fetch from cache) the record of a single document
    pub async fn extract(&self, path: &Path) -> ArchiveResult<Arc<DocumentRecord>> {
        self.extractor.extract(path, &self.documents).await
    }

    /// List every document, most recent logical file date first
    ///
    /// Documents that fail to extract are logged and left out. Documents with
    /// equal dates keep their discovery order.
    pub async fn list_all_documents(&self) -> ArchiveResult<Vec<Arc<DocumentRecord>>> {
        let start = std::time::Instant::now();
        let scanner = self.scanner.clone();
        let paths = tokio::task::spawn_blocking(move || scanner.list_document_paths()).await??;

        tracing::info!("Parse {} documents", paths.len());
        // `buffered` yields in input order, so discovery order survives
        let results: Vec<(PathBuf, ArchiveResult<Arc<DocumentRecord>>)> = stream::iter(paths)
            .map(|path| async move {
                let result = self.extract(&path).await;
                (path, result)
            })
            .buffered(self.extract_concurrency)
            .collect()
            .await;

        let mut records = Vec::with_capacity(results.len());
        for (path, result) in results {
            match result {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("Error parsing document {}: {}", path.display(), e),
            }
        }

        sort_by_file_date(&mut records);
        tracing::info!(
            "Listed {} documents in {:?}",
            records.len(),
            start.elapsed()
        );
        Ok(records)
    }

    /// Count the documents of every visible category
    pub async fn list_categories(&self) -> ArchiveResult<Vec<CategoryInfo>> {
        let scanner = self.scanner.clone();
        let categories = tokio::task::spawn_blocking(move || {
            let categories = scanner.list_categories()?;
            let mut infos = Vec::with_capacity(categories.len());
            for category in categories {
                match scanner.count_documents(&category) {
                    Ok(elements) => infos.push(CategoryInfo {
                        name: category.name,
                        elements,
                    }),
                    Err(e) => tracing::warn!("Skipping category {}: {}", category.name, e),
                }
            }
            Ok::<_, ArchiveError>(infos)
        })
        .await??;

        tracing::debug!("Found {} categories", categories.len());
        Ok(categories)
    }

    /// Record of an already listed document
    pub async fn document(&self, id: Fingerprint) -> ArchiveResult<Arc<DocumentRecord>> {
        self.documents
            .lookup(id)
            .await
            .ok_or(ArchiveError::UnknownDocument(id))
    }

    /// JPEG thumbnail of an already listed document
    pub async fn thumbnail(&self, id: Fingerprint) -> ArchiveResult<Bytes> {
        self.thumbnails.get_or_render(id, &self.documents).await
    }
}

/// Stable sort, most recent logical file date first
pub fn sort_by_file_date(records: &mut [Arc<DocumentRecord>]) {
    records.sort_by(|a, b| b.file_date.cmp(&a.file_date));
}
