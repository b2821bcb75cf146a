//! The tracker: validation, detection and lookup behind one handle.

use crate::config::{Endpoints, DEFAULT_ECHO_URL, DEFAULT_FALLBACK_URL, DEFAULT_PRIMARY_URL};
use crate::detect::SelfAddressDetector;
use crate::fetch::{HttpFetch, ReqwestFetcher};
use crate::resolve::GeoResolver;
use iptrack_core::{classify, AddressClass, LookupFailure, Resolution, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shown when the input is blank
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter an IP address";

/// Shown when the input is neither IPv4 nor IPv6
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid IPv4 or IPv6 address";

/// Looks up addresses and the caller's own address
#[derive(Clone, Debug)]
pub struct IpTracker {
    inner: Arc<TrackerInner>,
}

#[derive(Debug)]
struct TrackerInner {
    detector: SelfAddressDetector,
    resolver: GeoResolver,
}

impl IpTracker {
    /// Create a tracker against the public services with default settings
    pub fn new() -> Result<Self> {
        IpTrackerBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> IpTrackerBuilder {
        IpTrackerBuilder::new()
    }

    /// Validate user input and look it up.
    ///
    /// Surrounding whitespace is ignored. Blank or malformed input fails with
    /// [`LookupFailure::Validation`] before any request is made.
    pub async fn track(&self, input: &str) -> Result<Resolution> {
        let address = input.trim();
        if address.is_empty() {
            return Err(LookupFailure::Validation(EMPTY_INPUT_MESSAGE.to_string()));
        }

        let class = classify(address);
        if class == AddressClass::Invalid {
            return Err(LookupFailure::Validation(INVALID_INPUT_MESSAGE.to_string()));
        }

        debug!(address, %class, "tracking address");
        self.resolve(address).await
    }

    /// Detect the caller's public address, then look it up
    pub async fn track_self(&self) -> Result<Resolution> {
        let address = self.detect_self().await?;
        self.resolve(&address).await
    }

    /// Detect the caller's public address
    pub async fn detect_self(&self) -> Result<String> {
        self.inner.detector.detect().await
    }

    /// Look up an address without validating it
    pub async fn resolve(&self, address: &str) -> Result<Resolution> {
        self.inner.resolver.resolve(address).await
    }

    /// Access the resolver
    #[must_use]
    pub fn resolver(&self) -> &GeoResolver {
        &self.inner.resolver
    }

    /// Access the detector
    #[must_use]
    pub fn detector(&self) -> &SelfAddressDetector {
        &self.inner.detector
    }
}

/// Builder for configuring an [`IpTracker`]
pub struct IpTrackerBuilder {
    primary_url: String,
    fallback_url: String,
    echo_url: String,
    timeout: Duration,
    user_agent: String,
    fetcher: Option<Arc<dyn HttpFetch>>,
}

impl Default for IpTrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IpTrackerBuilder {
    /// Create a builder pointing at the public services
    #[must_use]
    pub fn new() -> Self {
        Self {
            primary_url: DEFAULT_PRIMARY_URL.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            echo_url: DEFAULT_ECHO_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("iptrack/{}", env!("CARGO_PKG_VERSION")),
            fetcher: None,
        }
    }

    /// Set the primary service base URL
    #[must_use]
    pub fn primary_url(mut self, url: impl Into<String>) -> Self {
        self.primary_url = url.into();
        self
    }

    /// Set the fallback service base URL
    #[must_use]
    pub fn fallback_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = url.into();
        self
    }

    /// Set the echo service URL
    #[must_use]
    pub fn echo_url(mut self, url: impl Into<String>) -> Self {
        self.echo_url = url.into();
        self
    }

    /// Set the request timeout (ignored when a custom fetcher is set)
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header (ignored when a custom fetcher is set)
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Use a custom HTTP implementation instead of reqwest
    #[must_use]
    pub fn fetcher(mut self, fetcher: Arc<dyn HttpFetch>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the tracker
    pub fn build(self) -> Result<IpTracker> {
        let endpoints = Endpoints::parse(&self.primary_url, &self.fallback_url, &self.echo_url)?;

        let fetcher: Arc<dyn HttpFetch> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(ReqwestFetcher::with_options(self.timeout, &self.user_agent)?),
        };

        Ok(IpTracker {
            inner: Arc::new(TrackerInner {
                detector: SelfAddressDetector::new(Arc::clone(&fetcher), endpoints.echo.clone()),
                resolver: GeoResolver::new(fetcher, endpoints),
            }),
        })
    }
}
