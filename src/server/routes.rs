//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness check, no upstream call
        .route("/health", get(handlers::health))
        // Landing page with the search API health check
        .route("/", get(handlers::index))
        .route("/concepts/:uid", get(handlers::concept_detail))
        .route("/documents", get(handlers::list_documents))
        .route("/documents/:doc_id", get(handlers::document_detail))
        // Static assets
        .route("/static/style.css", get(handlers::serve_css))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
