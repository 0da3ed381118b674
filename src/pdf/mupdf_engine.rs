//! MuPDF-backed PDF engine
//!
//! MuPDF's fz_context is not thread-safe, so nothing here is shared between
//! threads: every call to [`MupdfEngine::open`] opens a fresh document that
//! lives only as long as the returned handle.

use std::path::Path;

use image::RgbImage;
use mupdf::{Colorspace, Document, Matrix, Page};

use super::engine::{PdfDocument, PdfEngine, PdfPage};
use super::error::PdfError;

/// Points per inch in PDF user space
pub const POINTS_PER_INCH: f32 = 72.0;

/// [`PdfEngine`] implementation on top of the `mupdf` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfEngine;

impl MupdfEngine {
    pub fn new() -> Self {
        Self
    }
}

impl PdfEngine for MupdfEngine {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, PdfError> {
        let path_str = path.to_string_lossy();
        let doc = Document::open(&*path_str)
            .map_err(|e| PdfError::Open(format!("{}: {}", path.display(), e)))?;
        let page_count = doc.page_count()? as usize;

        Ok(Box::new(MupdfDocument { doc, page_count }))
    }
}

struct MupdfDocument {
    doc: Document,
    page_count: usize,
}

impl PdfDocument for MupdfDocument {
    fn page_count(&self) -> Result<usize, PdfError> {
        Ok(self.page_count)
    }

    fn page(&self, index: usize) -> Result<Box<dyn PdfPage + '_>, PdfError> {
        if index >= self.page_count {
            return Err(PdfError::PageNotFound(index, self.page_count));
        }
        let page = self.doc.load_page(index as i32)?;
        Ok(Box::new(MupdfPage { page }))
    }
}

struct MupdfPage {
    page: Page,
}

impl PdfPage for MupdfPage {
    fn text(&self) -> Result<String, PdfError> {
        self.page.to_text().map_err(|e| PdfError::Text(e.to_string()))
    }

    fn render(&self, dpi: f32) -> Result<RgbImage, PdfError> {
        let scale = dpi / POINTS_PER_INCH;
        let matrix = Matrix::new_scale(scale, scale);

        // JPEG has no alpha channel, render straight to RGB
        let colorspace = Colorspace::device_rgb();
        let pixmap = self
            .page
            .to_pixmap(&matrix, &colorspace, false, false)
            .map_err(|e| PdfError::Render(e.to_string()))?;

        let width = pixmap.width() as u32;
        let height = pixmap.height() as u32;
        let samples = pixmap.samples();
        let n = pixmap.n() as usize;

        let mut rgb_buffer = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height as usize {
            for x in 0..width as usize {
                let offset = (y * width as usize + x) * n;
                let r = samples.get(offset).copied().unwrap_or(0);
                let g = samples.get(offset + 1).copied().unwrap_or(0);
                let b = samples.get(offset + 2).copied().unwrap_or(0);
                rgb_buffer.extend_from_slice(&[r, g, b]);
            }
        }

        RgbImage::from_raw(width, height, rgb_buffer)
            .ok_or_else(|| PdfError::Render("Pixmap does not match its dimensions".to_string()))
    }
}
