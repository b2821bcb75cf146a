//! `iptrack lookup` - Locate an IP address.

use anyhow::Result;
use colored::Colorize;
use iptrack::{AddressClass, GeoRecord, Resolution};

use super::Context;
use crate::cli::args::LookupArgs;
use crate::education::Explain;
use crate::output::{format_coordinates, map_url, postal_or_na, spinner, OutputFormat};

pub async fn execute(ctx: Context, args: LookupArgs) -> Result<()> {
    if ctx.explain {
        Explain::lookup(args.address.trim()).print();
    }

    let tracker = ctx.tracker()?;

    let progress = spinner(ctx.output_format, "Tracking IP address...");
    let result = tracker.track(&args.address).await;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }
    let resolution = result?;

    print_resolution(&ctx, &resolution)?;

    if args.open_map {
        if let Some((lat, lon)) = resolution.record.coordinates() {
            open::that(map_url(lat, lon))?;
        } else {
            eprintln!("{} no coordinates to show on a map", "Note:".yellow().bold());
        }
    }

    Ok(())
}

/// Print a resolution in the context's output format.
pub(crate) fn print_resolution(ctx: &Context, resolution: &Resolution) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(resolution)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(resolution)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.serialize(&resolution.record)?;
            writer.flush()?;
        }
        OutputFormat::Pretty => {
            print_record_pretty(&resolution.record);
            if ctx.verbose {
                println!();
                println!("{}", format!("Answered by the {} service", resolution.source).dimmed());
            }
        }
    }

    Ok(())
}

fn print_record_pretty(record: &GeoRecord) {
    let class = record.address_class();

    // Header
    println!("{}", "IP Address Details".bold());
    let badge = match class {
        AddressClass::V4 => class.to_string().green(),
        _ => class.to_string().magenta(),
    };
    println!("  {}  [{}]", record.address.cyan().bold(), badge);
    if class == AddressClass::V4 {
        println!("  {}", "IPv6 not detected".dimmed());
    }
    println!();

    // Location
    println!("{}", "Location Information".bold().underline());
    println!("  {} {}", "Location:".bold(), record.location());
    println!("  {} {}", "ZIP Code:".bold(), postal_or_na(&record.postal_code));
    println!("  {} {}", "Country Code:".bold(), record.country_code);
    println!("  {} {}", "Timezone:".bold(), record.timezone);
    println!("  {} {}", "ISP:".bold(), record.isp);
    println!("  {} {}", "Organization:".bold(), record.organization);

    // Map position
    if let Some((lat, lon)) = record.coordinates() {
        println!();
        println!("{}", "Map Location".bold().underline());
        println!("  {} {}", "Coordinates:".bold(), format_coordinates(lat, lon));
        println!("  {} {}", "Map:".bold(), map_url(lat, lon).cyan().underline());
    }

    if !record.autonomous_system.is_empty() {
        println!();
        println!("{}", "Network Information".bold().underline());
        println!("  {}", record.autonomous_system);
    }
}
