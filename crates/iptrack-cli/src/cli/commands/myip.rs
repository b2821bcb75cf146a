//! `iptrack myip` - Show your public IP address.

use anyhow::Result;
use colored::Colorize;
use iptrack::DEFAULT_ECHO_URL;
use serde::Serialize;
use std::io::Write;

use super::lookup::print_resolution;
use super::Context;
use crate::cli::args::MyipArgs;
use crate::education::Explain;
use crate::output::{spinner, OutputFormat};

#[derive(Serialize)]
struct MyIp<'a> {
    ip: &'a str,
}

pub async fn execute(ctx: Context, args: MyipArgs) -> Result<()> {
    // Show explanation if requested
    if ctx.explain {
        let echo_url = ctx.echo_url.as_deref().unwrap_or(DEFAULT_ECHO_URL);
        Explain::myip(args.locate, echo_url).print();
    }

    let tracker = ctx.tracker()?;

    if args.locate {
        let progress = spinner(ctx.output_format, "Detecting your IP address...");
        let result = tracker.track_self().await;
        if let Some(bar) = progress {
            bar.finish_and_clear();
        }
        return print_resolution(&ctx, &result?);
    }

    let ip = tracker.detect_self().await?;
    write_ip(std::io::stdout().lock(), ctx.output_format, &ip)
}

fn write_ip<W: Write>(mut out: W, format: OutputFormat, ip: &str) -> Result<()> {
    let row = MyIp { ip };

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&row)?)?;
        }
        OutputFormat::Yaml => {
            write!(out, "{}", serde_yaml::to_string(&row)?)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.serialize(&row)?;
            writer.flush()?;
        }
        OutputFormat::Pretty => {
            writeln!(out, "Your IP: {}", ip.cyan().bold())?;
        }
    }

    Ok(())
}
