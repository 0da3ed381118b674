//! PDF engine error types

use thiserror::Error;

/// Errors raised by a [`PdfEngine`](super::PdfEngine) or the thumbnail encoder
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to open PDF: {0}")]
    Open(String),
    #[error("Page {0} not found (document has {1} pages)")]
    PageNotFound(usize, usize),
    #[error("Failed to extract text: {0}")]
    Text(String),
    #[error("Failed to render page: {0}")]
    Render(String),
    #[error("Image encoding error: {0}")]
    Encode(String),
    #[error("MuPDF error: {0}")]
    MuPdf(String),
}

impl From<mupdf::Error> for PdfError {
    fn from(e: mupdf::Error) -> Self {
        PdfError::MuPdf(e.to_string())
    }
}

impl From<image::ImageError> for PdfError {
    fn from(e: image::ImageError) -> Self {
        PdfError::Encode(e.to_string())
    }
}
