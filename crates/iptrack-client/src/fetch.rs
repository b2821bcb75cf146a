//! The HTTP capability handed to the detector and the resolver.

use async_trait::async_trait;
use iptrack_core::{LookupFailure, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// A raw HTTP response: status and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl HttpResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

/// Performs GET requests.
///
/// Implementations only report transport failures as errors: any response
/// that arrives, whatever its status, is returned as an [`HttpResponse`].
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// GET `url` and return the response
    async fn get(&self, url: &Url) -> Result<HttpResponse>;
}

/// [`HttpFetch`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    http: HttpClient,
}

impl ReqwestFetcher {
    /// Wrap an existing client
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Build a client with the given timeout and User-Agent
    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .map_err(|e| LookupFailure::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LookupFailure::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LookupFailure::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
