//! HTTP client for the statistics API.
//!
//! One [`ApiClient`] is built at startup from the API configuration and
//! shared read-only by every tool call. No retries: a failed request is
//! reported once and the caller decides what to show.

use std::time::Duration;

use reqwest::{Client, header};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::FetchError;
use super::request::{Method, RemoteRequest};
use crate::core::{Error, Result};

/// Shared client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client sending `Accept: application/json` to `base_url`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent.to_string());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::config("API base URL must not be empty"));
        }

        Ok(Self { http, base_url })
    }

    /// Base URL requests are resolved against (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue one request and return the JSON body of a 2xx response.
    pub async fn fetch(&self, request: &RemoteRequest) -> std::result::Result<Value, FetchError> {
        debug!(
            "Fetching from: {}{}",
            self.base_url,
            request.path_and_query()
        );

        let builder = match request.method {
            Method::Get => self.http.get(self.url_for(&request.path)),
        };

        let response = builder
            .query(&request.query)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", request.path, e);
                FetchError::transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("API returned {} for {}: {}", status, request.path, body);
            return Err(FetchError::status(status.as_u16(), &body));
        }

        let bytes = response.bytes().await.map_err(FetchError::transport)?;
        debug!("API response received: {} bytes", bytes.len());

        serde_json::from_slice(&bytes).map_err(|e| FetchError::decode(status.as_u16(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::error::FetchErrorKind;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(server.uri(), Some(Duration::from_secs(5)), "test-agent").unwrap()
    }

    #[test]
    fn test_rejects_empty_base_url() {
        assert!(ApiClient::new("", None, "test-agent").is_err());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::new("https://example.org/v1/", None, "test-agent").unwrap();
        assert_eq!(client.base_url(), "https://example.org/v1");
        assert_eq!(client.url_for("/population"), "https://example.org/v1/population");
    }

    #[tokio::test]
    async fn test_fetch_sends_query_and_accept_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/countries"))
            .and(query_param("region", "Africa"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let mut request = RemoteRequest::get("/countries");
        request.push("region", "Africa");

        let body = client_for(&server).fetch(&request).await.unwrap();
        assert_eq!(body, json!({ "items": [] }));
    }

    #[tokio::test]
    async fn test_fetch_error_status_uses_upstream_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/population"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({ "message": "yearFrom is invalid" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch(&RemoteRequest::get("/population"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Status);
        assert_eq!(err.status, Some(422));
        assert_eq!(err.message, "yearFrom is invalid");
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/population"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch(&RemoteRequest::get("/population"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Reserve a free port, then release it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(
            format!("http://{addr}"),
            Some(Duration::from_secs(2)),
            "test-agent",
        )
        .unwrap();
        let err = client
            .fetch(&RemoteRequest::get("/population"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Transport);
        assert!(err.status.is_none());
    }
}
