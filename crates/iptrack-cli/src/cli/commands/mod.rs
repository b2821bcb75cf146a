//! Command implementations.

pub mod classify;
pub mod config;
pub mod guide;
pub mod lookup;
pub mod myip;

use iptrack::IpTracker;
use std::path::PathBuf;
use std::time::Duration;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show explanations
    pub explain: bool,

    /// Verbose output
    pub verbose: bool,

    /// Primary service override
    pub primary_url: Option<String>,

    /// Fallback service override
    pub fallback_url: Option<String>,

    /// Echo service override
    pub echo_url: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// Where the config file lives, if a location is known
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Create a tracker with the configured endpoints.
    pub fn tracker(&self) -> anyhow::Result<IpTracker> {
        let mut builder = IpTracker::builder().timeout(self.timeout);

        if let Some(url) = &self.primary_url {
            builder = builder.primary_url(url);
        }
        if let Some(url) = &self.fallback_url {
            builder = builder.fallback_url(url);
        }
        if let Some(url) = &self.echo_url {
            builder = builder.echo_url(url);
        }

        Ok(builder.build()?)
    }
}
