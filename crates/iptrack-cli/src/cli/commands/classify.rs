//! `iptrack classify` - Tell IPv4, IPv6 and invalid inputs apart.

use anyhow::Result;
use iptrack::{classify, AddressClass};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::ClassifyArgs;
use crate::education::Explain;
use crate::output::OutputFormat;

#[derive(Tabled, Serialize)]
struct ClassRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Class")]
    class: AddressClass,
}

pub fn execute(ctx: &Context, args: &ClassifyArgs) -> Result<()> {
    if ctx.explain {
        Explain::classify().print();
    }

    let rows: Vec<ClassRow> = args
        .inputs
        .iter()
        .map(|input| ClassRow {
            input: input.clone(),
            class: classify(input),
        })
        .collect();

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&rows)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Pretty => {
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    Ok(())
}
