//! Category listing endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::archive::CategoryInfo;
use crate::error::Result;
use crate::state::AppState;

/// Create the categories router
pub fn router() -> Router<AppState> {
    Router::new().route("/categories/", get(list_categories))
}

/// Count the documents of every category
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryInfo>>> {
    Ok(Json(state.archive().list_categories().await?))
}
