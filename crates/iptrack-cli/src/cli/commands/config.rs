//! `iptrack config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;
use iptrack::{DEFAULT_ECHO_URL, DEFAULT_FALLBACK_URL, DEFAULT_PRIMARY_URL};

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::cli::require_config_path;
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", require_config_path(ctx.config_path.as_ref())?.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load(require_config_path(ctx.config_path.as_ref())?)?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
        _ => {
            let or_default = |value: &Option<String>, default: &str| {
                value
                    .clone()
                    .unwrap_or_else(|| format!("{} {}", default, "(default)".dimmed()))
            };

            println!("{}", "Current Configuration:".bold());
            println!();
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!(
                "  {} {}",
                "primary_url:".bold(),
                or_default(&config.primary_url, DEFAULT_PRIMARY_URL)
            );
            println!(
                "  {} {}",
                "fallback_url:".bold(),
                or_default(&config.fallback_url, DEFAULT_FALLBACK_URL)
            );
            println!(
                "  {} {}",
                "echo_url:".bold(),
                or_default(&config.echo_url, DEFAULT_ECHO_URL)
            );
            println!(
                "  {} {}",
                "timeout_secs:".bold(),
                config
                    .timeout_secs
                    .map_or_else(|| "(default)".dimmed().to_string(), |t| t.to_string())
            );
            println!("  {} {}", "explain_by_default:".bold(), config.explain_by_default);
        }
    }

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = require_config_path(ctx.config_path.as_ref())?;

    // An unreadable file is replaced rather than blocking the repair
    let mut config = Config::load(path).unwrap_or_default();
    config.set(key, value)?;
    config.save(path)?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}
