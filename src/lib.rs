//! Archive Server Library
//!
//! Indexes a category-per-directory archive of PDF documents and serves
//! listings, category counts, thumbnails and the original files over HTTP.
//! The binary entry point is in main.rs.
//!
//! # Modules
//!
//! - `fingerprint`: deterministic document ids derived from paths
//! - `archive`: scanning, metadata extraction, listings
//! - `cache`: document and thumbnail caches
//! - `pdf`: PDF engine seam and its MuPDF implementation
//! - `routes`, `auth`, `state`, `error`, `config`: the HTTP service

pub mod archive;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod pdf;
pub mod routes;
pub mod state;

pub use fingerprint::Fingerprint;
