//! PDF archive indexing
//!
//! An archive is a root directory with one subdirectory per category and PDF
//! documents directly inside each category:
//!
//! ```text
//! <root>/
//!   invoices/2021_03_04_10_15_30_acme.pdf
//!   invoices/2021_04_01_09_00_00_acme.pdf
//!   letters/bank.pdf
//!   .trash/        (hidden, ignored)
//! ```
//!
//! [`ArchiveService`] ties the [`ArchiveScanner`], the [`MetadataExtractor`]
//! and the caches together into listings and thumbnails.

mod error;
mod extract;
mod scanner;
mod service;
mod types;

pub use error::{ArchiveError, ArchiveResult};
pub use extract::{parse_filename_timestamp, read_record, MetadataExtractor};
pub use scanner::{ArchiveScanner, DOCUMENT_SUFFIX};
pub use service::{sort_by_file_date, ArchiveOptions, ArchiveService, DEFAULT_EXTRACT_CONCURRENCY};
pub use types::{Category, CategoryInfo, DocumentRecord};
