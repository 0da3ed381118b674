//! PDF capability
//!
//! A small trait seam over the PDF library plus the MuPDF implementation used
//! by the server and the JPEG encoder used for thumbnails.

mod encode;
mod engine;
mod error;
mod mupdf_engine;

pub use encode::{encode_jpeg, DEFAULT_JPEG_QUALITY};
pub use engine::{PdfDocument, PdfEngine, PdfPage};
pub use error::PdfError;
pub use mupdf_engine::{MupdfEngine, POINTS_PER_INCH};
