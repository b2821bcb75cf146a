use serde::{Deserialize, Serialize};

use crate::classify::{classify, AddressClass};

/// Geolocation of a single address, normalized from whichever service answered.
///
/// String fields are never absent: a value the service did not send is the
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    /// The address the service reports it looked up
    pub address: String,

    /// Full country name
    pub country: String,

    /// Two-letter country code (ISO 3166-1 alpha-2)
    pub country_code: String,

    /// Region/state name
    pub region_name: String,

    /// Region/state code
    pub region_code: String,

    /// City name
    pub city: String,

    /// Postal/ZIP code, may be empty
    pub postal_code: String,

    /// Latitude in degrees, absent when unknown or out of range
    pub latitude: Option<f64>,

    /// Longitude in degrees, absent when unknown or out of range
    pub longitude: Option<f64>,

    /// IANA timezone name
    pub timezone: String,

    /// Internet service provider
    pub isp: String,

    /// Organization owning the network
    pub organization: String,

    /// Autonomous system description (e.g. "AS15169 Google LLC"), may be empty
    pub autonomous_system: String,
}

impl GeoRecord {
    /// Returns true if the record has both coordinates
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Returns the coordinates as a tuple if available
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// "City, Region, Country", skipping empty parts
    #[must_use]
    pub fn location(&self) -> String {
        [&self.city, &self.region_name, &self.country]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Classifies the reported address
    #[must_use]
    pub fn address_class(&self) -> AddressClass {
        classify(&self.address)
    }
}

/// Keep a latitude only if it lies within [-90, 90]
#[must_use]
pub fn checked_latitude(value: Option<f64>) -> Option<f64> {
    value.filter(|v| (-90.0..=90.0).contains(v))
}

/// Keep a longitude only if it lies within [-180, 180]
#[must_use]
pub fn checked_longitude(value: Option<f64>) -> Option<f64> {
    value.filter(|v| (-180.0..=180.0).contains(v))
}

/// Which geolocation service produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The primary service answered
    Primary,
    /// The primary failed and the fallback answered
    Fallback,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A successful lookup: the record and the service it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// The normalized record
    pub record: GeoRecord,
    /// The service that answered
    pub source: Source,
}

impl Resolution {
    /// Drop the source and keep the record
    #[must_use]
    pub fn into_record(self) -> GeoRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeoRecord {
        GeoRecord {
            address: "8.8.8.8".into(),
            country: "United States".into(),
            country_code: "US".into(),
            region_name: "Virginia".into(),
            region_code: "VA".into(),
            city: "Ashburn".into(),
            postal_code: "20149".into(),
            latitude: Some(39.03),
            longitude: Some(-77.5),
            timezone: "America/New_York".into(),
            isp: "Google LLC".into(),
            organization: "Google Public DNS".into(),
            autonomous_system: "AS15169 Google LLC".into(),
        }
    }

    #[test]
    fn test_location_skips_empty_parts() {
        let mut record = sample();
        assert_eq!(record.location(), "Ashburn, Virginia, United States");

        record.region_name.clear();
        assert_eq!(record.location(), "Ashburn, United States");

        assert_eq!(GeoRecord::default().location(), "");
    }

    #[test]
    fn test_coordinates() {
        let mut record = sample();
        assert_eq!(record.coordinates(), Some((39.03, -77.5)));

        record.longitude = None;
        assert!(!record.has_coordinates());
        assert_eq!(record.coordinates(), None);
    }

    #[test]
    fn test_checked_coordinates() {
        assert_eq!(checked_latitude(Some(90.0)), Some(90.0));
        assert_eq!(checked_latitude(Some(-90.5)), None);
        assert_eq!(checked_latitude(Some(f64::NAN)), None);
        assert_eq!(checked_longitude(Some(-180.0)), Some(-180.0));
        assert_eq!(checked_longitude(Some(181.0)), None);
        assert_eq!(checked_longitude(None), None);
    }

    #[test]
    fn test_address_class() {
        let mut record = sample();
        assert_eq!(record.address_class(), AddressClass::V4);
        record.address = "2001:4860:4860::8888".into();
        assert_eq!(record.address_class(), AddressClass::V6);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["country_code"], "US");
        assert_eq!(json["autonomous_system"], "AS15169 Google LLC");

        let parsed: GeoRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sample());
    }
}
