//! Archive data model

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::fingerprint::Fingerprint;

/// Metadata of one archived PDF
///
/// Serialized as the `/alldocs/` listing entry. The filesystem path stays
/// internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    pub id: Fingerprint,
    /// File name, including the extension
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// Filesystem modification time
    #[serde(rename = "modified")]
    pub created: DateTime<Local>,
    /// Logical file date: the filename timestamp when present, else `created`
    #[serde(rename = "timestamp")]
    pub file_date: DateTime<Local>,
    pub pages: usize,
    /// Base64 of the first page's text
    pub content: String,
    #[serde(skip)]
    pub path: PathBuf,
}

/// A category directory directly under the archive root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub path: PathBuf,
}

/// Entry of the `/categories/` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub name: String,
    /// Number of PDF files directly inside the category
    pub elements: usize,
}
