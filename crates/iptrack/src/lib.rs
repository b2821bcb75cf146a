//! Locate IPv4 and IPv6 addresses through public geolocation services.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use iptrack::{classify, IpTracker};
//!
//! #[tokio::main]
//! async fn main() -> iptrack::Result<()> {
//!     let tracker = IpTracker::new()?;
//!
//!     // Validate and look up user input
//!     let found = tracker.track("2001:4860:4860::8888").await?;
//!     println!("{} is in {}", found.record.address, found.record.location());
//!
//!     // Or locate yourself
//!     let me = tracker.track_self().await?;
//!     println!("You are in {} via {}", me.record.location(), me.record.isp);
//!
//!     println!("{}", classify("8.8.8.8")); // IPv4
//!     Ok(())
//! }
//! ```
//!
//! ip-api.com is queried first; ipapi.co is tried once if it fails. Both
//! answers are normalized into the same [`GeoRecord`].
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/iptrack/0.3.0")]

// Re-export core types
pub use iptrack_core::*;

// Re-export client
pub use iptrack_client::{
    Endpoints, GeoResolver, HttpFetch, HttpResponse, IpTracker, IpTrackerBuilder, ReqwestFetcher,
    SelfAddressDetector, DEFAULT_ECHO_URL, DEFAULT_FALLBACK_URL, DEFAULT_PRIMARY_URL,
    DEFAULT_TIMEOUT,
};
