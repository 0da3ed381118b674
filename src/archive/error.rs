//! Archive error types

use std::path::PathBuf;

use thiserror::Error;

use crate::fingerprint::Fingerprint;
use crate::pdf::PdfError;

/// Result type alias for archive operations
pub type ArchiveResult<T> = std::result::Result<T, ArchiveError>;

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive root itself could not be enumerated
    #[error("Cannot read archive root {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single archive entry could not be read
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PDF engine rejected a document
    #[error("PDF error on {path}: {source}")]
    Pdf {
        path: PathBuf,
        #[source]
        source: PdfError,
    },

    #[error("Requesting unknown document: {0}")]
    UnknownDocument(Fingerprint),

    /// A blocking extraction or render task panicked or was cancelled
    #[error("Task join error: {0}")]
    Task(String),
}

impl ArchiveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn pdf(path: impl Into<PathBuf>, source: PdfError) -> Self {
        Self::Pdf {
            path: path.into(),
            source,
        }
    }
}

impl From<tokio::task::JoinError> for ArchiveError {
    fn from(e: tokio::task::JoinError) -> Self {
        ArchiveError::Task(e.to_string())
    }
}
