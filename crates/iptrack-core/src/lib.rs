//! Core types for the iptrack geolocation client.
//!
//! This crate provides the pieces shared by every iptrack crate:
//!
//! - **Classification**: [`classify`] and [`is_valid`] decide whether a string
//!   is an IPv4 address, an IPv6 address, or neither
//! - **Types**: the canonical [`GeoRecord`] every upstream response is
//!   normalized into
//! - **Errors**: the [`LookupFailure`] taxonomy with user-facing messages
//!
//! # Example
//!
//! ```rust
//! use iptrack_core::{classify, AddressClass};
//!
//! assert_eq!(classify("8.8.8.8"), AddressClass::V4);
//! assert_eq!(classify("2001:4860:4860::8888"), AddressClass::V6);
//! assert_eq!(classify("999.1.1.1"), AddressClass::Invalid);
//! ```

#![doc(html_root_url = "https://docs.rs/iptrack-core/0.3.0")]

mod classify;
mod error;
pub mod types;

pub use classify::{classify, is_valid, AddressClass};
pub use error::{FailureKind, LookupFailure, Result, UNRESOLVABLE_MESSAGE};
pub use types::*;
