//! Output formatting for different formats.

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Zoom level used for map links
const MAP_ZOOM: u8 = 10;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed output with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Start a spinner on stderr for pretty output; `None` otherwise.
///
/// indicatif hides the spinner by itself when stderr is not a terminal.
pub fn spinner(format: OutputFormat, message: &str) -> Option<ProgressBar> {
    if format != OutputFormat::Pretty {
        return None;
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}

/// Postal code, or `N/A` when the service had none
pub fn postal_or_na(postal: &str) -> &str {
    if postal.is_empty() {
        "N/A"
    } else {
        postal
    }
}

/// Coordinates with four decimals
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!("{lat:.4}, {lon:.4}")
}

/// OpenStreetMap link centered on the coordinates
pub fn map_url(lat: f64, lon: f64) -> String {
    format!("https://www.openstreetmap.org/?mlat={lat:.4}&mlon={lon:.4}#map={MAP_ZOOM}/{lat:.4}/{lon:.4}")
}
