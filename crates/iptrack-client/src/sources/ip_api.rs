//! ip-api.com response format.

use iptrack_core::{checked_latitude, checked_longitude, GeoRecord, LookupFailure, Result};
use serde::Deserialize;

/// Fields requested from the primary service
pub const IP_API_FIELDS: &str =
    "status,message,country,countryCode,region,regionName,city,zip,lat,lon,timezone,isp,org,as,query";

/// Response body of `GET /json/{address}?fields=...`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpApiResponse {
    /// `"success"` or `"fail"`
    #[serde(default)]
    pub status: Option<String>,
    /// Reason for a `"fail"` status
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    /// Region code, e.g. "CA"
    #[serde(default)]
    pub region: Option<String>,
    /// Region name, e.g. "California"
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub isp: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default, rename = "as")]
    pub as_description: Option<String>,
    /// The address that was looked up
    #[serde(default)]
    pub query: Option<String>,
}

impl IpApiResponse {
    /// Returns true if the service reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Normalize a successful body, or turn a `"fail"` body into a failure
    pub fn into_record(self) -> Result<GeoRecord> {
        if !self.is_success() {
            let message = self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Invalid IP address".to_string());
            return Err(LookupFailure::service(message));
        }

        Ok(GeoRecord {
            address: self.query.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            country_code: self.country_code.unwrap_or_default(),
            region_name: self.region_name.unwrap_or_default(),
            region_code: self.region.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            postal_code: self.zip.unwrap_or_default(),
            latitude: checked_latitude(self.lat),
            longitude: checked_longitude(self.lon),
            timezone: self.timezone.unwrap_or_default(),
            isp: self.isp.unwrap_or_default(),
            organization: self.org.unwrap_or_default(),
            autonomous_system: self.as_description.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOGLE_DNS: &str = r#"{
        "status": "success",
        "country": "United States",
        "countryCode": "US",
        "region": "VA",
        "regionName": "Virginia",
        "city": "Ashburn",
        "zip": "20149",
        "lat": 39.03,
        "lon": -77.5,
        "timezone": "America/New_York",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "as": "AS15169 Google LLC",
        "query": "8.8.8.8"
    }"#;

    #[test]
    fn test_success_mapping() {
        let response: IpApiResponse = serde_json::from_str(GOOGLE_DNS).unwrap();
        let record = response.into_record().unwrap();

        assert_eq!(record.address, "8.8.8.8");
        assert_eq!(record.country, "United States");
        assert_eq!(record.country_code, "US");
        assert_eq!(record.region_name, "Virginia");
        assert_eq!(record.region_code, "VA");
        assert_eq!(record.city, "Ashburn");
        assert_eq!(record.postal_code, "20149");
        assert_eq!(record.coordinates(), Some((39.03, -77.5)));
        assert_eq!(record.timezone, "America/New_York");
        assert_eq!(record.isp, "Google LLC");
        assert_eq!(record.organization, "Google Public DNS");
        assert_eq!(record.autonomous_system, "AS15169 Google LLC");
    }

    #[test]
    fn test_fail_status() {
        let response: IpApiResponse =
            serde_json::from_str(r#"{"status":"fail","message":"invalid query","query":"x"}"#)
                .unwrap();
        let err = response.into_record().unwrap_err();
        assert!(matches!(
            err,
            LookupFailure::Service { ref message, status: None } if message == "invalid query"
        ));
    }

    #[test]
    fn test_fail_without_message() {
        let response: IpApiResponse = serde_json::from_str(r#"{"status":"fail"}"#).unwrap();
        assert_eq!(
            response.into_record().unwrap_err().to_string(),
            "Invalid IP address"
        );
    }

    #[test]
    fn test_missing_status_is_failure() {
        let response: IpApiResponse = serde_json::from_str(r#"{"query":"8.8.8.8"}"#).unwrap();
        assert!(response.into_record().is_err());
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let response: IpApiResponse =
            serde_json::from_str(r#"{"status":"success","query":"1.1.1.1","zip":null}"#).unwrap();
        let record = response.into_record().unwrap();
        assert_eq!(record.address, "1.1.1.1");
        assert_eq!(record.postal_code, "");
        assert_eq!(record.autonomous_system, "");
        assert!(!record.has_coordinates());
    }
}
