//! Landing page.

use axum::{extract::State, response::IntoResponse};

use super::super::template_structs::IndexTemplate;
use super::super::AppState;
use super::helpers::render;

/// Pretty-printed health body, or `None` when there is nothing to show.
fn health_block(body: &serde_json::Value) -> Option<String> {
    if body.is_null() {
        return None;
    }
    Some(serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string()))
}

/// Landing page showing the search API health-check body.
///
/// A failed fetch is logged and the body block is left out; the page itself
/// always renders.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let health = match state.api.health_check().await {
        Ok(body) => health_block(&body),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            None
        }
    };

    render(&IndexTemplate {
        title: "Tribunals search",
        health,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_block() {
        assert_eq!(health_block(&serde_json::Value::Null), None);
        assert_eq!(
            health_block(&serde_json::json!({"status": "ok"})).as_deref(),
            Some("{\n  \"status\": \"ok\"\n}")
        );
        assert_eq!(health_block(&serde_json::json!(false)).as_deref(), Some("false"));
    }
}
