//! Application state management

use std::sync::Arc;

use crate::archive::ArchiveService;
use crate::auth::Credentials;
use crate::config::Config;
use crate::pdf::PdfEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    archive: ArchiveService,
    credentials: Credentials,
}

impl AppState {
    pub fn new(archive: ArchiveService, credentials: Credentials) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                archive,
                credentials,
            }),
        }
    }

    /// Build the state for a validated configuration
    pub fn from_config(config: &Config, engine: Arc<dyn PdfEngine>) -> Self {
        let archive = ArchiveService::new(
            config.archive.path.clone(),
            engine,
            config.archive_options(),
        );
        Self::new(archive, config.credentials())
    }

    /// Get the archive service
    pub fn archive(&self) -> &ArchiveService {
        &self.inner.archive
    }

    /// Get the accepted credentials
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }
}
