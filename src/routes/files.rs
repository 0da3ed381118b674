//! Original file download
//!
//! `GET /doc/:id` streams the PDF of a document that has already been listed.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use tokio_util::io::ReaderStream;

use crate::archive::ArchiveError;
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::documents::parse_id;

/// Create the files router
pub fn router() -> Router<AppState> {
    Router::new().route("/doc/:id", get(serve_document))
}

/// Stream the original PDF
async fn serve_document(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let id = parse_id(&id)?;
    let record = state.archive().document(id).await?;

    let file = tokio::fs::File::open(&record.path)
        .await
        .map_err(|e| ArchiveError::io(&record.path, e))?;
    let size = file
        .metadata()
        .await
        .map_err(|e| ArchiveError::io(&record.path, e))?
        .len();

    tracing::debug!("Transferring document {} ({} bytes)", record.path.display(), size);
    let body = Body::from_stream(ReaderStream::new(file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, size)
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", header_safe_filename(&record.name)),
        )
        .body(body)
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Drop characters that cannot appear inside a quoted header parameter
fn header_safe_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_safe_filename() {
        assert_eq!(header_safe_filename("report.pdf"), "report.pdf");
        assert_eq!(header_safe_filename("a\"b\\c\n.pdf"), "abc.pdf");
    }
}
