//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use iptrack::DEFAULT_TIMEOUT;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::output::OutputFormat;

const NO_CONFIG_DIR: &str = "Could not determine config directory; pass --config <path>";

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    crate::logging::init(cli.verbose, cli.no_color);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = match cli.config {
        Some(path) => Some(path),
        None => match Config::default_path() {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(error = %e, "no default config location");
                None
            }
        },
    };
    let config = load_config(config_path.as_deref(), cli.command.works_offline())?;

    // Flags and env vars win over the config file
    let ctx = commands::Context {
        output_format: cli
            .output
            .or(config.output_format)
            .unwrap_or(OutputFormat::Pretty),
        explain: cli.explain || config.explain_by_default,
        verbose: cli.verbose,
        primary_url: cli.primary_url.or(config.primary_url),
        fallback_url: cli.fallback_url.or(config.fallback_url),
        echo_url: config.echo_url,
        timeout: effective_timeout(cli.timeout, config.timeout_secs),
        config_path,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Lookup(args) => commands::lookup::execute(ctx, args).await,
        Commands::Myip(args) => commands::myip::execute(ctx, args).await,
        Commands::Classify(args) => commands::classify::execute(&ctx, &args),
        Commands::Guide(args) => commands::guide::execute(&ctx, &args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Read the config file. Commands that never talk to a service carry on
/// with defaults when the file is missing a location or cannot be read.
fn load_config(path: Option<&Path>, offline: bool) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load(path),
        None => Err(anyhow::anyhow!(NO_CONFIG_DIR)),
    };

    match loaded {
        Ok(config) => Ok(config),
        Err(e) if offline => {
            warn!("ignoring configuration: {e}");
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn effective_timeout(flag: Option<u64>, config: Option<u64>) -> Duration {
    flag.or(config).map_or(DEFAULT_TIMEOUT, Duration::from_secs)
}

/// Where `config` commands read and write, failing when no location is known.
pub(crate) fn require_config_path(path: Option<&PathBuf>) -> Result<&Path> {
    path.map(PathBuf::as_path)
        .ok_or_else(|| anyhow::anyhow!(NO_CONFIG_DIR))
}
