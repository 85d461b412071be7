//! Rendering helpers shared by the page handlers.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::template_structs::ErrorTemplate;
use crate::api::ApiError;

/// Render a template into an HTML body.
pub fn render<T: Template>(template: &T) -> Html<String> {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Status code an upstream failure maps to.
pub fn error_status(err: &ApiError) -> StatusCode {
    if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_GATEWAY
    }
}

/// Error page for a failed upstream fetch of `what` (e.g. "concept").
pub fn error_response(what: &str, err: &ApiError) -> Response {
    let status = error_status(err);
    let (title, message) = if status == StatusCode::NOT_FOUND {
        tracing::debug!("{} not found upstream: {}", what, err);
        ("Not Found", format!("The {} you asked for does not exist.", what))
    } else {
        tracing::error!("Failed to load {}: {}", what, err);
        ("Error", format!("Failed to load {}: {}", what, err))
    };

    let template = ErrorTemplate {
        title,
        message: &message,
    };
    (status, render(&template)).into_response()
}
