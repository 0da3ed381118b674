//! Shared fixtures: a fake PDF engine and archive builders
//!
//! Fake documents are text files starting with `%PDF-FAKE\n`; pages are
//! separated by form feeds. Anything else fails to open.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use archive_server::archive::{ArchiveOptions, ArchiveService};
use archive_server::pdf::{PdfDocument, PdfEngine, PdfError, PdfPage};
use image::RgbImage;
use tempfile::TempDir;

pub const FAKE_MAGIC: &str = "%PDF-FAKE\n";

#[derive(Default)]
pub struct FakeEngine {
    opens: AtomicUsize,
    renders: Arc<AtomicUsize>,
}

impl FakeEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

impl PdfEngine for FakeEngine {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, PdfError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        let data = fs::read(path).map_err(|e| PdfError::Open(e.to_string()))?;
        let text = String::from_utf8_lossy(&data).into_owned();
        let body = text
            .strip_prefix(FAKE_MAGIC)
            .ok_or_else(|| PdfError::Open(format!("{} is not a PDF", path.display())))?;
        let pages = if body.is_empty() {
            Vec::new()
        } else {
            body.split('\x0c').map(str::to_string).collect()
        };
        Ok(Box::new(FakeDocument {
            pages,
            renders: Arc::clone(&self.renders),
        }))
    }
}

struct FakeDocument {
    pages: Vec<String>,
    renders: Arc<AtomicUsize>,
}

impl PdfDocument for FakeDocument {
    fn page_count(&self) -> Result<usize, PdfError> {
        Ok(self.pages.len())
    }

    fn page(&self, index: usize) -> Result<Box<dyn PdfPage + '_>, PdfError> {
        let text = self
            .pages
            .get(index)
            .ok_or(PdfError::PageNotFound(index, self.pages.len()))?;
        Ok(Box::new(FakePage {
            text,
            renders: &self.renders,
        }))
    }
}

struct FakePage<'a> {
    text: &'a str,
    renders: &'a AtomicUsize,
}

impl PdfPage for FakePage<'_> {
    fn text(&self) -> Result<String, PdfError> {
        Ok(self.text.to_string())
    }

    fn render(&self, dpi: f32) -> Result<RgbImage, PdfError> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        let side = (dpi / 72.0).ceil() as u32 * 4;
        let shade = (self.text.len() % 256) as u8;
        Ok(RgbImage::from_pixel(side, side, image::Rgb([shade, 128, 255 - shade])))
    }
}

/// Write a fake PDF with the given page texts
pub fn write_pdf(path: &Path, pages: &[&str]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let content = format!("{}{}", FAKE_MAGIC, pages.join("\x0c"));
    fs::write(path, content).unwrap();
}

/// Write a file the fake engine refuses to open
pub fn write_corrupt(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"garbage").unwrap();
}

/// Set a file's modification time to `secs` after the epoch
pub fn set_mtime(path: &Path, secs: u64) -> SystemTime {
    let time = UNIX_EPOCH + Duration::from_secs(secs);
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
    time
}

/// A temporary archive root, canonicalized like the server does
pub struct TestArchive {
    _dir: TempDir,
    pub root: PathBuf,
}

impl TestArchive {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        Self { _dir: dir, root }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn service(&self, engine: Arc<FakeEngine>) -> ArchiveService {
        ArchiveService::new(self.root.clone(), engine, ArchiveOptions::default())
    }
}
