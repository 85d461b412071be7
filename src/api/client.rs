//! HTTP client for the search API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::ApiError;
use crate::config::Settings;
use crate::models::{Concept, Document, DocumentListing};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Thin wrapper over `reqwest` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct SearchApiClient {
    base_url: String,
    client: Client,
}

impl SearchApiClient {
    /// Create a client from application settings.
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout))
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self::with_client(&settings.api_url, client))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single concept by identifier.
    pub async fn get_concept(&self, id: &str) -> Result<Concept, ApiError> {
        let path = format!("/concepts/{}", urlencoding::encode(id));
        self.get_json(&path, &[]).await
    }

    /// Fetch the documents mentioning a concept.
    pub async fn list_documents(&self, concept_id: &str) -> Result<DocumentListing, ApiError> {
        self.get_json("/documents", &[("concepts", concept_id)])
            .await
    }

    /// Fetch a single document by identifier.
    pub async fn get_document(&self, id: &str) -> Result<Document, ApiError> {
        let path = format!("/documents/{}", urlencoding::encode(id));
        self.get_json(&path, &[]).await
    }

    /// Fetch the health-check body. Its shape is not interpreted.
    pub async fn health_check(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("/health-check", &[]).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {} {:?}", url, query);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| request_error(path, e))?;

        match resp.status() {
            s if s.is_success() => {}
            StatusCode::NOT_FOUND => return Err(ApiError::NotFound(path.to_string())),
            s => {
                return Err(ApiError::Status {
                    status: s.as_u16(),
                    path: path.to_string(),
                })
            }
        }

        resp.json().await.map_err(|e| request_error(path, e))
    }
}

/// Map a `reqwest` failure: timeouts and transport errors are connection
/// problems, decode errors are parse problems.
fn request_error(path: &str, e: reqwest::Error) -> ApiError {
    if e.is_decode() && !e.is_timeout() {
        ApiError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        }
    } else {
        ApiError::Connection {
            path: path.to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = SearchApiClient::with_client("http://api.test:8000/", Client::new());
        assert_eq!(client.base_url(), "http://api.test:8000");
        assert_eq!(
            client.url("/health-check"),
            "http://api.test:8000/health-check"
        );
    }

    #[test]
    fn test_new_from_settings() {
        let settings = Settings {
            api_url: "http://search.internal//".to_string(),
            ..Default::default()
        };
        let client = SearchApiClient::new(&settings).unwrap();
        assert_eq!(client.base_url(), "http://search.internal");
    }

    #[tokio::test]
    async fn test_timeout_is_connection_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health-check"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "ok"}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let http = Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let client = SearchApiClient::with_client(&server.uri(), http);

        let err = client.health_check().await.unwrap_err();
        assert!(matches!(err, ApiError::Connection { .. }), "{:?}", err);
    }

    #[tokio::test]
    async fn test_invalid_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/concepts/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = SearchApiClient::with_client(&server.uri(), Client::new());
        let err = client.get_concept("c1").await.unwrap_err();
        assert!(matches!(err, ApiError::Parse { .. }), "{:?}", err);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        // Nothing listens on the discard port.
        let client = SearchApiClient::with_client("http://127.0.0.1:9", Client::new());
        let err = client.health_check().await.unwrap_err();
        assert!(matches!(err, ApiError::Connection { .. }));
        assert!(!err.is_not_found());
    }
}
