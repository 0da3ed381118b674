//! In-memory caches
//!
//! Two independently guarded maps keyed by document fingerprint: extracted
//! document records and rendered thumbnails. Each `tokio::sync::RwLock` only
//! covers the map access itself; extraction and rendering happen outside of
//! it so a slow PDF never blocks unrelated cache traffic.
//!
//! Neither cache evicts. Their size is bounded by the archive.

mod documents;
mod thumbnails;

pub use documents::DocumentCache;
pub use thumbnails::{ThumbnailCache, ThumbnailSettings, DEFAULT_THUMBNAIL_DPI};
