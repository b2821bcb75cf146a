//! Wire formats of the two geolocation services and their normalization.

mod ip_api;
mod ipapi_co;

pub use ip_api::{IpApiResponse, IP_API_FIELDS};
pub use ipapi_co::IpapiCoResponse;
