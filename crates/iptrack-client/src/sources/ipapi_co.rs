//! ipapi.co response format.

use iptrack_core::{checked_latitude, checked_longitude, GeoRecord, LookupFailure, Result};
use serde::Deserialize;

/// Response body of `GET /{address}/json/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpapiCoResponse {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    /// Region name
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Network owner; the service has no separate ISP field
    #[serde(default)]
    pub org: Option<String>,
    /// AS number, e.g. "AS15169"
    #[serde(default)]
    pub asn: Option<String>,
    /// Set when the lookup failed
    #[serde(default)]
    pub error: bool,
    /// Why the lookup failed
    #[serde(default)]
    pub reason: Option<String>,
}

impl IpapiCoResponse {
    /// Normalize a successful body, or turn an error body into a failure
    pub fn into_record(self) -> Result<GeoRecord> {
        if self.error {
            let reason = self
                .reason
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "Invalid IP address or service unavailable".to_string());
            return Err(LookupFailure::service(reason));
        }

        let org = self.org.unwrap_or_default();

        Ok(GeoRecord {
            address: self.ip.unwrap_or_default(),
            country: self.country_name.unwrap_or_default(),
            country_code: self.country_code.unwrap_or_default(),
            region_name: self.region.unwrap_or_default(),
            region_code: self.region_code.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            postal_code: self.postal.unwrap_or_default(),
            latitude: checked_latitude(self.latitude),
            longitude: checked_longitude(self.longitude),
            timezone: self.timezone.unwrap_or_default(),
            isp: org.clone(),
            organization: org,
            autonomous_system: self.asn.unwrap_or_default(),
        })
    }
}
