//! Geolocation lookup with a single fallback hop.

use crate::config::{join_segments, Endpoints};
use crate::fetch::HttpFetch;
use crate::sources::{IpApiResponse, IpapiCoResponse, IP_API_FIELDS};
use iptrack_core::{GeoRecord, LookupFailure, Resolution, Result, Source};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Resolves an address against the primary service, then the fallback.
///
/// The resolver does not validate its input: whatever string it is given is
/// forwarded to the services. Validate with [`iptrack_core::classify`] first,
/// or use [`crate::IpTracker::track`].
#[derive(Clone)]
pub struct GeoResolver {
    fetcher: Arc<dyn HttpFetch>,
    endpoints: Endpoints,
}

impl GeoResolver {
    /// Create a resolver over the given endpoints
    pub fn new(fetcher: Arc<dyn HttpFetch>, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// Look up `address`, reporting which service answered.
    ///
    /// The fallback is only consulted when the primary fails. When both fail
    /// the error is [`LookupFailure::AllSourcesExhausted`], whose message is
    /// the same whatever went wrong; the two underlying failures are kept in
    /// the variant and logged.
    #[instrument(skip(self), level = "debug")]
    pub async fn resolve(&self, address: &str) -> Result<Resolution> {
        let primary = match self.query_primary(address).await {
            Ok(record) => {
                return Ok(Resolution {
                    record,
                    source: Source::Primary,
                })
            }
            Err(e) => e,
        };

        warn!(error = %primary, kind = ?primary.kind(), "primary lookup failed, trying fallback");

        match self.query_fallback(address).await {
            Ok(record) => Ok(Resolution {
                record,
                source: Source::Fallback,
            }),
            Err(fallback) => {
                warn!(
                    primary = %primary,
                    fallback = %fallback,
                    status = ?fallback.status_code(),
                    "all lookup sources failed"
                );
                Err(LookupFailure::AllSourcesExhausted {
                    primary: Box::new(primary),
                    fallback: Box::new(fallback),
                })
            }
        }
    }

    /// Look up `address` and return only the record
    pub async fn resolve_record(&self, address: &str) -> Result<GeoRecord> {
        self.resolve(address).await.map(Resolution::into_record)
    }

    async fn query_primary(&self, address: &str) -> Result<GeoRecord> {
        let mut url = join_segments(&self.endpoints.primary, &[address]);
        url.query_pairs_mut().append_pair("fields", IP_API_FIELDS);

        let response = self.fetcher.get(&url).await?;
        if !response.is_success() {
            return Err(LookupFailure::http_status(response.status));
        }

        let body: IpApiResponse = response
            .json()
            .map_err(|e| LookupFailure::service(format!("unreadable primary response: {e}")))?;

        debug!(status = ?body.status, "primary response");
        body.into_record()
    }

    async fn query_fallback(&self, address: &str) -> Result<GeoRecord> {
        let url = join_segments(&self.endpoints.fallback, &[address, "json", ""]);

        let response = self.fetcher.get(&url).await?;
        if !response.is_success() {
            return Err(LookupFailure::http_status(response.status));
        }

        let body: IpapiCoResponse = response
            .json()
            .map_err(|e| LookupFailure::service(format!("unreadable fallback response: {e}")))?;

        debug!(error = body.error, "fallback response");
        body.into_record()
    }
}

impl std::fmt::Debug for GeoResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoResolver")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
