//! Error types for the HTTP layer
//!
//! Handlers return [`AppError`]; its `IntoResponse` picks the status code and
//! writes a plain-text message body.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::archive::ArchiveError;
use crate::auth::REALM;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized => {
                let mut response =
                    (StatusCode::UNAUTHORIZED, "Unauthorized\n".to_string()).into_response();
                if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{}\"", REALM)) {
                    response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
                }
                return response;
            }
            AppError::Archive(ArchiveError::UnknownDocument(_)) => {
                tracing::info!("{}", self);
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Archive(e) => {
                tracing::error!("Archive error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
