//! PDF capability seam
//!
//! The archive only needs four things from a PDF library: open a file, count
//! its pages, read a page's text and rasterize a page. Handles are scoped
//! values; dropping them releases the underlying document.

use std::path::Path;

use image::RgbImage;

use super::error::PdfError;

/// Opens PDF documents from the filesystem
pub trait PdfEngine: Send + Sync + 'static {
    /// Open the document at `path`
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, PdfError>;
}

/// An open PDF document
pub trait PdfDocument {
    fn page_count(&self) -> Result<usize, PdfError>;

    /// Load a page by zero-based index
    fn page(&self, index: usize) -> Result<Box<dyn PdfPage + '_>, PdfError>;
}

/// A loaded page of a [`PdfDocument`]
pub trait PdfPage {
    /// Plain text of the page
    fn text(&self) -> Result<String, PdfError>;

    /// Rasterize the page at `dpi` (72 dpi is one pixel per point)
    fn render(&self, dpi: f32) -> Result<RgbImage, PdfError>;
}
