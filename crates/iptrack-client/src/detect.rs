//! Public address detection.

use crate::fetch::HttpFetch;
use iptrack_core::{LookupFailure, Result};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Message reported for every detection failure
pub const DETECT_FAILED_MESSAGE: &str = "Unable to detect your IP address";

#[derive(Debug, Deserialize)]
struct EchoResponse {
    #[serde(default)]
    ip: Option<String>,
}

/// Asks an echo service for the caller's public address
#[derive(Clone)]
pub struct SelfAddressDetector {
    fetcher: Arc<dyn HttpFetch>,
    echo_url: Url,
}

impl SelfAddressDetector {
    /// Create a detector that queries `echo_url`
    pub fn new(fetcher: Arc<dyn HttpFetch>, echo_url: Url) -> Self {
        Self { fetcher, echo_url }
    }

    /// Returns the caller's public address.
    ///
    /// Makes exactly one request. Every failure, whatever its cause, is a
    /// [`LookupFailure::Network`] with [`DETECT_FAILED_MESSAGE`].
    pub async fn detect(&self) -> Result<String> {
        self.try_detect().await.map_err(|e| {
            warn!(error = %e, "address detection failed");
            LookupFailure::Network(DETECT_FAILED_MESSAGE.to_string())
        })
    }

    async fn try_detect(&self) -> Result<String> {
        let response = self.fetcher.get(&self.echo_url).await?;
        if !response.is_success() {
            return Err(LookupFailure::http_status(response.status));
        }

        let echo: EchoResponse = response
            .json()
            .map_err(|e| LookupFailure::service(format!("unreadable echo response: {e}")))?;

        let ip = echo.ip.as_deref().map(str::trim).unwrap_or_default();
        if ip.is_empty() {
            return Err(LookupFailure::service("echo response has no address"));
        }

        debug!(ip, "detected public address");
        Ok(ip.to_string())
    }
}

impl std::fmt::Debug for SelfAddressDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelfAddressDetector")
            .field("echo_url", &self.echo_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubFetch;

    fn detector(stub: &Arc<StubFetch>) -> SelfAddressDetector {
        SelfAddressDetector::new(
            stub.clone(),
            Url::parse("https://echo.test/?format=json").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_detect() {
        let stub = Arc::new(StubFetch::new().respond("echo.test", 200, r#"{"ip":"203.0.113.7"}"#));
        let ip = detector(&stub).detect().await.unwrap();
        assert_eq!(ip, "203.0.113.7");
        assert_eq!(stub.calls(), vec!["https://echo.test/?format=json"]);
    }

    #[tokio::test]
    async fn test_server_error() {
        let stub = Arc::new(StubFetch::new().respond("echo.test", 500, "oops"));
        let err = detector(&stub).detect().await.unwrap_err();
        assert!(matches!(err, LookupFailure::Network(ref m) if m == DETECT_FAILED_MESSAGE));
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error() {
        let stub = Arc::new(StubFetch::new());
        let err = detector(&stub).detect().await.unwrap_err();
        assert_eq!(err.to_string(), DETECT_FAILED_MESSAGE);
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_ip() {
        let stub = Arc::new(StubFetch::new().respond("echo.test", 200, r#"{"ip":""}"#));
        assert!(detector(&stub).detect().await.is_err());

        let stub = Arc::new(StubFetch::new().respond("echo.test", 200, "203.0.113.7"));
        assert!(detector(&stub).detect().await.is_err());
    }
}
