//! Address detection and geolocation lookup for iptrack.
//!
//! [`IpTracker`] is the entry point. It owns a [`SelfAddressDetector`] and a
//! [`GeoResolver`], both of which talk HTTP through an injected [`HttpFetch`]
//! so tests can substitute the network.
//!
//! ```rust,ignore
//! use iptrack_client::IpTracker;
//!
//! let tracker = IpTracker::new()?;
//! let resolution = tracker.track("8.8.8.8").await?;
//! println!("{} ({})", resolution.record.location(), resolution.source);
//! ```

#![doc(html_root_url = "https://docs.rs/iptrack-client/0.3.0")]

mod client;
mod config;
mod detect;
mod fetch;
mod resolve;
pub mod sources;

#[cfg(test)]
mod testing;

pub use client::{
    IpTracker, IpTrackerBuilder, DEFAULT_TIMEOUT, EMPTY_INPUT_MESSAGE, INVALID_INPUT_MESSAGE,
};
pub use config::*;
pub use detect::{SelfAddressDetector, DETECT_FAILED_MESSAGE};
pub use fetch::{HttpFetch, HttpResponse, ReqwestFetcher};
pub use iptrack_core::{LookupFailure, Result};
pub use resolve::GeoResolver;
