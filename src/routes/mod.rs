//! Route modules for Archive Server

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_basic_auth;
use crate::state::AppState;

pub mod categories;
pub mod documents;
pub mod files;
pub mod health;
pub mod thumbnails;

/// Build the application router
///
/// Every route, including unknown paths, requires Basic authentication.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::router())
        .merge(documents::router())
        .merge(categories::router())
        .merge(thumbnails::router())
        .merge(files::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_basic_auth))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
