//! HTTP client for communicating with the example backend
//!
//! Wraps the two remote operations behind the form screen: fetching the
//! lookup entries and submitting the input text.

use crate::api::error::ApiError;
use crate::api::traits::LookupApi;
use crate::state::LookupOption;
use async_trait::async_trait;

/// Default backend base URL
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Path of the example endpoint, relative to the base URL
const EXAMPLE_PATH: &str = "api/example";

/// Client for the example lookup/submit endpoints
pub struct ApiClient {
    /// The underlying HTTP client
    http: reqwest::Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client from `LOOKUP_FORM_API_URL`, a configured address, or the default
    pub fn from_env(configured: Option<String>) -> Self {
        let base_url = std::env::var("LOOKUP_FORM_API_URL")
            .ok()
            .or(configured)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(base_url)
    }

    fn example_url(&self) -> String {
        format!("{}/{}", self.base_url, EXAMPLE_PATH)
    }
}

#[async_trait]
impl LookupApi for ApiClient {
    async fn fetch_lookups(&self) -> Result<Vec<LookupOption>, ApiError> {
        let response = self
            .http
            .get(self.example_url())
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server(status));
        }

        response.json().await.map_err(ApiError::Network)
    }

    async fn submit(&self, payload: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.example_url())
            .body(payload.to_string())
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server(status));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:9000");
        assert_eq!(client.example_url(), "http://localhost:9000/api/example");
    }

    #[test]
    fn test_new_trims_trailing_slashes() {
        let client = ApiClient::new("http://localhost:9000/");
        assert_eq!(client.example_url(), "http://localhost:9000/api/example");
    }

    #[test]
    fn test_from_env_falls_back_to_configured_address() {
        std::env::remove_var("LOOKUP_FORM_API_URL");
        let client = ApiClient::from_env(Some("http://configured:1234".to_string()));
        assert_eq!(client.example_url(), "http://configured:1234/api/example");
    }

    #[test]
    fn test_from_env_falls_back_to_default() {
        std::env::remove_var("LOOKUP_FORM_API_URL");
        let client = ApiClient::from_env(None);
        assert_eq!(client.example_url(), format!("{DEFAULT_BASE_URL}/api/example"));
    }

    mod http {
        use super::*;
        use axum::{
            extract::State,
            http::StatusCode,
            routing::{get, post},
            Json, Router,
        };
        use std::net::SocketAddr;
        use std::sync::{Arc, Mutex};

        /// Serve a router on an ephemeral loopback port
        async fn serve(router: Router) -> SocketAddr {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router).await.unwrap();
            });
            addr
        }

        #[tokio::test]
        async fn test_fetch_lookups_decodes_response() {
            let router = Router::new().route(
                "/api/example",
                get(|| async {
                    Json(vec![
                        LookupOption {
                            key: true,
                            value: "True".to_string(),
                        },
                        LookupOption {
                            key: false,
                            value: "False".to_string(),
                        },
                    ])
                }),
            );
            let addr = serve(router).await;
            let client = ApiClient::new(format!("http://{addr}"));

            let options = client.fetch_lookups().await.unwrap();
            assert_eq!(options.len(), 2);
            assert_eq!(options[0].key, true);
            assert_eq!(options[0].value, "True");
            assert_eq!(options[1].key, false);
            assert_eq!(options[1].value, "False");
        }

        #[tokio::test]
        async fn test_non_success_status_maps_to_server_error() {
            let router = Router::new().route(
                "/api/example",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );
            let addr = serve(router).await;
            let client = ApiClient::new(format!("http://{addr}"));

            let err = client.fetch_lookups().await.unwrap_err();
            assert!(matches!(err, ApiError::Server(status) if status.as_u16() == 500));
        }

        #[tokio::test]
        async fn test_connection_failure_maps_to_network_error() {
            // Grab an ephemeral port, then drop the listener so nothing accepts
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let client = ApiClient::new(format!("http://{addr}"));
            let err = client.fetch_lookups().await.unwrap_err();
            assert!(matches!(err, ApiError::Network(_)));
        }

        #[tokio::test]
        async fn test_undecodable_body_maps_to_network_error() {
            let router = Router::new().route("/api/example", get(|| async { "not json" }));
            let addr = serve(router).await;
            let client = ApiClient::new(format!("http://{addr}"));

            let err = client.fetch_lookups().await.unwrap_err();
            assert!(matches!(err, ApiError::Network(_)));
        }

        #[tokio::test]
        async fn test_submit_posts_payload_verbatim() {
            let received: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
            let router = Router::new()
                .route(
                    "/api/example",
                    post(
                        |State(received): State<Arc<Mutex<Option<String>>>>, body: String| async move {
                            *received.lock().unwrap() = Some(body);
                            StatusCode::NO_CONTENT
                        },
                    ),
                )
                .with_state(Arc::clone(&received));
            let addr = serve(router).await;
            let client = ApiClient::new(format!("http://{addr}"));

            client.submit("some value").await.unwrap();

            assert_eq!(received.lock().unwrap().as_deref(), Some("some value"));
        }

        #[tokio::test]
        async fn test_submit_maps_failure_status_to_server_error() {
            let router =
                Router::new().route("/api/example", post(|| async { StatusCode::BAD_GATEWAY }));
            let addr = serve(router).await;
            let client = ApiClient::new(format!("http://{addr}"));

            let err = client.submit("payload").await.unwrap_err();
            assert!(matches!(err, ApiError::Server(status) if status.as_u16() == 502));
        }
    }
}
