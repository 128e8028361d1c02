//! Overview command.
//!
//! Collects the grid once and prints it as a striped version matrix.

use anyhow::Result;
use clap::Args;
use colored::*;
use tabled::builder::Builder;
use tabled::settings::Style;

use vantage_core::config::Config;
use vantage_core::overview::{Overview, OverviewService};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct OverviewArgs {
    /// Show each cell's tooltip (build time or failure reason) after the table
    #[arg(short, long)]
    details: bool,
}

pub async fn execute(args: OverviewArgs, config: &Config, format: OutputFormat) -> Result<()> {
    config.overview.validate()?;

    let service = OverviewService::new(config.overview.clone());
    let overview = service.collect().await;

    match format {
        OutputFormat::Table => print_table(&overview, args.details),
        _ => output::print_item(&overview, format),
    }

    Ok(())
}

fn print_table(overview: &Overview, details: bool) {
    if overview.rows.is_empty() {
        println!("{}", "No web services configured.".dimmed());
        return;
    }

    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(overview.environments.iter().map(|e| e.name.clone()));
    builder.push_record(header);

    for row in &overview.rows {
        let mut record = vec![row.name.clone()];
        for cell in &row.cells {
            record.push(match &cell.content {
                Some(content) if content.is_error => content.text.red().to_string(),
                Some(content) => content.text.green().to_string(),
                None => String::new(),
            });
        }
        builder.push_record(record);
    }

    let table = builder.build().with(Style::rounded()).to_string();
    println!("{table}");

    if details {
        println!();
        for row in &overview.rows {
            for cell in &row.cells {
                if let Some(content) = &cell.content {
                    output::print_detail(&cell.instance.key(), &content.title);
                }
            }
        }
    }

    let failed = overview
        .rows
        .iter()
        .flat_map(|row| &row.cells)
        .filter(|cell| cell.content.as_ref().is_some_and(|c| c.is_error))
        .count();
    if failed == 0 {
        output::print_success("All services responded");
    } else {
        output::print_error(&format!("{failed} cell(s) could not be resolved"));
    }
}
