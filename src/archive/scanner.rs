//! Archive scanner
//!
//! Walks an archive laid out as `<root>/<category>/<document>.pdf`. Only the
//! first two levels are visited; nothing below a category is considered.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ArchiveError, ArchiveResult};
use super::types::Category;

/// File suffix of archived documents (case-sensitive)
pub const DOCUMENT_SUFFIX: &str = ".pdf";

/// Scanner for a category-per-directory PDF archive
#[derive(Debug, Clone)]
pub struct ArchiveScanner {
    root: PathBuf,
}

impl ArchiveScanner {
    /// Create a scanner rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the visible category directories, sorted by name
    ///
    /// Failing to read the root is fatal. An entry that cannot be inspected is
    /// logged and skipped.
    pub fn list_categories(&self) -> ArchiveResult<Vec<Category>> {
        let entries = fs::read_dir(&self.root).map_err(|source| ArchiveError::RootUnreadable {
            path: self.root.clone(),
            source,
        })?;

        let mut categories = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Error reading entry of {}: {}", self.root.display(), e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            // Follows symlinks, a linked category directory counts as a category
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => categories.push(Category { name, path }),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Skipping category {}: {}", path.display(), e);
                }
            }
        }

        categories.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(
            "Found {} categories in {}",
            categories.len(),
            self.root.display()
        );
        Ok(categories)
    }

    /// List every document path of the archive in discovery order
    ///
    /// Categories are visited by name and documents sorted by name within a
    /// category. Unreadable categories are logged and skipped.
    pub fn list_document_paths(&self) -> ArchiveResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for category in self.list_categories()? {
            match self.category_documents(&category) {
                Ok(documents) => paths.extend(documents),
                Err(e) => tracing::warn!("Skipping category {}: {}", category.name, e),
            }
        }
        tracing::info!(
            "Found {} documents in {}",
            paths.len(),
            self.root.display()
        );
        Ok(paths)
    }

    /// Number of documents directly inside `category`
    pub fn count_documents(&self, category: &Category) -> ArchiveResult<usize> {
        self.category_documents(category).map(|documents| documents.len())
    }

    /// Documents directly inside a category, sorted by file name
    fn category_documents(&self, category: &Category) -> ArchiveResult<Vec<PathBuf>> {
        let entries =
            fs::read_dir(&category.path).map_err(|e| ArchiveError::io(&category.path, e))?;

        let mut documents = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Error reading entry of {}: {}", category.path.display(), e);
                    continue;
                }
            };

            if !is_document_name(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let path = entry.path();
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => documents.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping document {}: {}", path.display(), e),
            }
        }

        documents.sort();
        Ok(documents)
    }
}

fn is_document_name(name: &str) -> bool {
    name.ends_with(DOCUMENT_SUFFIX)
}
