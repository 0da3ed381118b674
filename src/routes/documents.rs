//! Document listing endpoint
//!
//! `GET /alldocs/` scans the archive, extracts every document not yet cached
//! and returns the records most recent first.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::archive::DocumentRecord;
use crate::error::{AppError, Result};
use crate::fingerprint::Fingerprint;
use crate::state::AppState;

/// Create the document listing router
pub fn router() -> Router<AppState> {
    Router::new().route("/alldocs/", get(list_documents))
}

/// List every document of the archive
async fn list_documents(State(state): State<AppState>) -> Result<Json<Vec<Arc<DocumentRecord>>>> {
    let records = state.archive().list_all_documents().await?;
    tracing::info!("Output {} documents", records.len());
    Ok(Json(records))
}

/// Parse a document id path parameter
pub(crate) fn parse_id(raw: &str) -> Result<Fingerprint> {
    raw.parse::<Fingerprint>().map_err(|_| {
        tracing::info!("Invalid docid: {}", raw);
        AppError::BadRequest(format!("Invalid docid: {}", raw))
    })
}
