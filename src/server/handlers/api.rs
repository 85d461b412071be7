//! Machine-facing endpoints.

use axum::{http::StatusCode, response::IntoResponse};

/// Liveness check for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}
