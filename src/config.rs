//! Configuration management for Archive Server
//!
//! Every option can be given on the command line or through the environment
//! (a `.env` file is loaded first by `main`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::{Args, Parser};
use thiserror::Error;

use crate::archive::{ArchiveOptions, DEFAULT_EXTRACT_CONCURRENCY};
use crate::auth::Credentials;
use crate::cache::{ThumbnailSettings, DEFAULT_THUMBNAIL_DPI};
use crate::pdf::DEFAULT_JPEG_QUALITY;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Archive path {path} is not accessible: {source}")]
    ArchiveUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive path {0} is not a directory")]
    ArchiveNotDirectory(PathBuf),

    #[error("Thumbnail DPI must be positive, got {0}")]
    InvalidDpi(f32),
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "archive-server",
    version,
    about = "Serve listings, thumbnails and files of a PDF archive"
)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub archive: ArchiveConfig,

    #[command(flatten)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "ARCHIVE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Server port
    #[arg(short, long, env = "ARCHIVE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[derive(Debug, Clone, Args)]
pub struct ArchiveConfig {
    /// Path to the document archive
    #[arg(long = "archive", env = "ARCHIVE_PATH")]
    pub path: PathBuf,

    /// Thumbnail render resolution
    #[arg(long, env = "ARCHIVE_THUMBNAIL_DPI", default_value_t = DEFAULT_THUMBNAIL_DPI)]
    pub thumbnail_dpi: f32,

    /// Thumbnail JPEG quality (1-100)
    #[arg(
        long,
        env = "ARCHIVE_JPEG_QUALITY",
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub jpeg_quality: u8,

    /// Documents extracted concurrently while listing
    #[arg(long, env = "ARCHIVE_EXTRACT_CONCURRENCY", default_value_t = DEFAULT_EXTRACT_CONCURRENCY)]
    pub extract_concurrency: usize,
}

#[derive(Clone, Args)]
pub struct AuthConfig {
    /// Basic-Auth user name
    #[arg(long, env = "ARCHIVE_AUTH_USER")]
    pub auth_user: String,

    /// Basic-Auth password
    #[arg(long, env = "ARCHIVE_AUTH_PASSWORD", hide_env_values = true)]
    pub auth_password: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("auth_user", &self.auth_user)
            .field("auth_password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Check the archive root and make it absolute
    ///
    /// Fingerprints are computed from absolute document paths, so the root is
    /// canonicalized once here.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let path = std::fs::canonicalize(&self.archive.path).map_err(|source| {
            ConfigError::ArchiveUnreadable {
                path: self.archive.path.clone(),
                source,
            }
        })?;
        if !path.is_dir() {
            return Err(ConfigError::ArchiveNotDirectory(path));
        }
        let dpi = self.archive.thumbnail_dpi;
        if dpi.is_nan() || dpi <= 0.0 {
            return Err(ConfigError::InvalidDpi(dpi));
        }
        self.archive.path = path;
        Ok(self)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    pub fn archive_options(&self) -> ArchiveOptions {
        ArchiveOptions {
            thumbnails: ThumbnailSettings {
                dpi: self.archive.thumbnail_dpi,
                jpeg_quality: self.archive.jpeg_quality,
            },
            extract_concurrency: self.archive.extract_concurrency,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.auth.auth_user, &self.auth.auth_password)
    }
}
