//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
///
/// Every field is optional; flags and environment variables override it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Primary geolocation service base URL.
    pub primary_url: Option<String>,

    /// Fallback geolocation service base URL.
    pub fallback_url: Option<String>,

    /// "What is my IP" echo service URL.
    pub echo_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Always show explanations (as if --explain was passed).
    #[serde(default)]
    pub explain_by_default: bool,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "iptrack", "iptrack")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "primary_url" => self.primary_url = Some(value.to_string()),
            "fallback_url" => self.fallback_url = Some(value.to_string()),
            "echo_url" => self.echo_url = Some(value.to_string()),
            "timeout_secs" | "timeout" => {
                self.timeout_secs = Some(
                    value
                        .parse()
                        .map_err(|_| anyhow::anyhow!("timeout must be a whole number of seconds"))?,
                );
            }
            "explain_by_default" | "explain" => self.explain_by_default = value.parse()?,
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     output_format      - Default output format (pretty/json/csv/yaml)\n  \
                     primary_url        - Primary lookup service base URL\n  \
                     fallback_url       - Fallback lookup service base URL\n  \
                     echo_url           - Public address echo service URL\n  \
                     timeout_secs       - Request timeout in seconds\n  \
                     explain_by_default - Always explain commands (true/false)",
                    key
                );
            }
        }

        Ok(())
    }
}
