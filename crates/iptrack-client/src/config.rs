//! Service endpoint configuration.

use iptrack_core::{LookupFailure, Result};
use url::Url;

/// Primary geolocation service (ip-api.com)
pub const DEFAULT_PRIMARY_URL: &str = "http://ip-api.com/json";

/// Fallback geolocation service (ipapi.co)
pub const DEFAULT_FALLBACK_URL: &str = "https://ipapi.co";

/// "What is my address" echo service (ipify)
pub const DEFAULT_ECHO_URL: &str = "https://api.ipify.org?format=json";

/// Base URLs of the three upstream services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base of the primary lookup; the address is appended as a path segment
    pub primary: Url,

    /// Base of the fallback lookup; `/{address}/json/` is appended
    pub fallback: Url,

    /// Echo endpoint, requested as-is
    pub echo: Url,
}

impl Endpoints {
    /// Parse all three endpoints
    pub fn parse(primary: &str, fallback: &str, echo: &str) -> Result<Self> {
        Ok(Self {
            primary: parse_endpoint("primary", primary)?,
            fallback: parse_endpoint("fallback", fallback)?,
            echo: parse_endpoint("echo", echo)?,
        })
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::parse(DEFAULT_PRIMARY_URL, DEFAULT_FALLBACK_URL, DEFAULT_ECHO_URL)
            .expect("default endpoints are valid URLs")
    }
}

fn parse_endpoint(name: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| LookupFailure::Config(format!("invalid {name} URL '{raw}': {e}")))?;

    if url.cannot_be_a_base() {
        return Err(LookupFailure::Config(format!(
            "{name} URL '{raw}' cannot take a path"
        )));
    }

    Ok(url)
}

/// Append path segments to `base`, ignoring a trailing slash on the base.
///
/// Segments are percent-encoded, so a zone index like `%eth0` arrives intact.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments.iter().copied());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.primary.as_str(), "http://ip-api.com/json");
        assert_eq!(endpoints.fallback.host_str(), Some("ipapi.co"));
        assert_eq!(endpoints.echo.query(), Some("format=json"));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = Endpoints::parse("not a url", DEFAULT_FALLBACK_URL, DEFAULT_ECHO_URL)
            .unwrap_err();
        assert!(matches!(err, LookupFailure::Config(_)));
        assert!(err.to_string().contains("primary"));

        let err = Endpoints::parse(DEFAULT_PRIMARY_URL, "mailto:x@y.z", DEFAULT_ECHO_URL)
            .unwrap_err();
        assert!(err.to_string().contains("fallback"));
    }

    #[test]
    fn test_join_segments() {
        let base = Url::parse("http://ip-api.com/json").unwrap();
        assert_eq!(
            join_segments(&base, &["8.8.8.8"]).as_str(),
            "http://ip-api.com/json/8.8.8.8"
        );

        let base = Url::parse("https://ipapi.co/").unwrap();
        assert_eq!(
            join_segments(&base, &["2001:db8::1", "json", ""]).as_str(),
            "https://ipapi.co/2001:db8::1/json/"
        );
    }

    #[test]
    fn test_join_segments_encodes_zone() {
        let base = Url::parse("http://ip-api.com/json").unwrap();
        assert_eq!(
            join_segments(&base, &["fe80::1%eth0"]).as_str(),
            "http://ip-api.com/json/fe80::1%25eth0"
        );
    }
}
