//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::education::Os;
use crate::output::OutputFormat;

/// Locate any IPv4 or IPv6 address
///
/// Looks addresses up on ip-api.com, falling back to ipapi.co when the
/// first service cannot answer. Use --explain on any command to see which
/// services it talks to.
#[derive(Parser, Debug)]
#[command(name = "iptrack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command does
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (defaults to the per-user config directory)
    #[arg(long, env = "IPTRACK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the primary geolocation service
    #[arg(long, env = "IPTRACK_PRIMARY_URL", global = true)]
    pub primary_url: Option<String>,

    /// Base URL of the fallback geolocation service
    #[arg(long, env = "IPTRACK_FALLBACK_URL", global = true)]
    pub fallback_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the location and network of an IP address
    Lookup(LookupArgs),

    /// Show your public IP address
    Myip(MyipArgs),

    /// Tell whether inputs are IPv4, IPv6 or invalid
    Classify(ClassifyArgs),

    /// How to find your local IP address
    Guide(GuideArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

impl Commands {
    /// Commands that never contact a service
    pub const fn works_offline(&self) -> bool {
        matches!(self, Self::Classify(_) | Self::Guide(_) | Self::Config(_))
    }
}

// ============================================================================
// Lookup command
// ============================================================================

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// IPv4 or IPv6 address (e.g., 8.8.8.8 or 2001:4860:4860::8888)
    pub address: String,

    /// Open the location on OpenStreetMap in your browser
    #[arg(long)]
    pub open_map: bool,
}

// ============================================================================
// Myip command
// ============================================================================

#[derive(Args, Debug)]
pub struct MyipArgs {
    /// Also look up the location of the detected address
    #[arg(short, long)]
    pub locate: bool,
}

// ============================================================================
// Classify command
// ============================================================================

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Strings to classify
    #[arg(required = true)]
    pub inputs: Vec<String>,
}

// ============================================================================
// Guide command
// ============================================================================

#[derive(Args, Debug)]
pub struct GuideArgs {
    /// Only show the steps for one operating system
    #[arg(long, value_enum)]
    pub os: Option<Os>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., output_format, primary_url)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}
