//! Web server rendering search API data as HTML.
//!
//! Every page handler turns its path or query parameters into one or more
//! upstream requests and hands the decoded JSON to an askama template.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::api::SearchApiClient;
use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<SearchApiClient>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self::with_client(SearchApiClient::new(settings)?))
    }

    pub fn with_client(api: SearchApiClient) -> Self {
        Self { api: Arc::new(api) }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let listener = bind_listener(host, port).await?;
    tracing::info!(
        "Starting server at http://{} (search API: {})",
        listener.local_addr()?,
        settings.api_url
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Bind a listener, resolving host names as well as IP literals.
pub async fn bind_listener(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_listener_resolves_host_names() {
        let listener = bind_listener("localhost", 0).await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_bind_listener_accepts_ip_literals() {
        let listener = bind_listener("127.0.0.1", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_listener_reports_unresolvable_host() {
        let err = bind_listener("no such host", 0).await.unwrap_err();
        assert!(err.to_string().contains("Failed to bind no such host:0"));
    }
}
