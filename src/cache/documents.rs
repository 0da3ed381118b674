//! Document metadata cache

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::archive::DocumentRecord;
use crate::fingerprint::Fingerprint;

/// Thread-safe fingerprint → record map
///
/// Unbounded and append-only: records live until the process exits and are
/// never invalidated when the underlying file changes.
#[derive(Clone, Default)]
pub struct DocumentCache {
    records: Arc<RwLock<HashMap<Fingerprint, Arc<DocumentRecord>>>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached record
    pub async fn lookup(&self, id: Fingerprint) -> Option<Arc<DocumentRecord>> {
        let records = self.records.read().await;
        records.get(&id).cloned()
    }

    /// Insert or overwrite the record under its fingerprint
    pub async fn store(&self, record: DocumentRecord) -> Arc<DocumentRecord> {
        let record = Arc::new(record);
        let mut records = self.records.write().await;
        records.insert(record.id, Arc::clone(&record));
        record
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use std::path::PathBuf;

    fn record(path: &str, pages: usize) -> DocumentRecord {
        let now = Local::now();
        DocumentRecord {
            id: Fingerprint::of_str(path),
            name: "a.pdf".to_string(),
            size: 10,
            created: now,
            file_date: now,
            pages,
            content: String::new(),
            path: PathBuf::from(path),
        }
    }

    #[tokio::test]
    async fn test_document_cache_creation() {
        let cache = DocumentCache::new();
        assert!(cache.is_empty().await);
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_store_then_lookup() {
        let cache = DocumentCache::new();
        let stored = cache.store(record("/a/b.pdf", 3)).await;

        let found = cache.lookup(stored.id).await.unwrap();
        assert!(Arc::ptr_eq(&stored, &found));
        assert!(cache.lookup(Fingerprint::of_str("/a/c.pdf")).await.is_none());
    }

    #[tokio::test]
    async fn test_last_store_wins() {
        let cache = DocumentCache::new();
        cache.store(record("/a/b.pdf", 3)).await;
        cache.store(record("/a/b.pdf", 7)).await;

        assert_eq!(cache.len().await, 1);
        let found = cache.lookup(Fingerprint::of_str("/a/b.pdf")).await.unwrap();
        assert_eq!(found.pages, 7);
    }
}
