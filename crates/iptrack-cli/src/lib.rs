//! # iptrack-cli
//!
//! Command-line front end for the iptrack geolocation client.
//!
//! ## Features
//!
//! - **Lookup**: locate any IPv4 or IPv6 address, with automatic fallback
//!   to a second service
//! - **My IP**: detect your public address and optionally locate it
//! - **Classify**: check whether strings are IPv4, IPv6 or neither
//! - **Guide**: find your local address with your OS's own tools
//! - **Multiple output formats**: pretty, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod logging;
pub mod output;

pub use cli::run;
