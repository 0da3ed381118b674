//! Thumbnail endpoint

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

use super::documents::parse_id;

/// Create the thumbnail router
pub fn router() -> Router<AppState> {
    Router::new().route("/thumbnail/:id", get(get_thumbnail))
}

/// First page of a listed document as JPEG
async fn get_thumbnail(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id)?;
    let data = state.archive().thumbnail(id).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .header(header::CONTENT_LENGTH, data.len())
        .header(header::CACHE_CONTROL, "max-age=86400")
        .body(Body::from(data))
        .map_err(|e| AppError::Internal(e.to_string()))
}
