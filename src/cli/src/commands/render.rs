//! Render command.
//!
//! Collects the grid once and writes the HTML overview document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vantage_core::config::Config;
use vantage_core::overview::{render_html, OverviewService};

use crate::output;

#[derive(Args)]
pub struct RenderArgs {
    /// Write the HTML document here instead of stdout
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub async fn execute(args: RenderArgs, config: &Config) -> Result<()> {
    config.overview.validate()?;

    let service = OverviewService::new(config.overview.clone());
    let overview = service.collect().await;
    let html = render_html(&overview);

    match args.file {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("writing overview to {}", path.display()))?;
            output::print_success(&format!("Wrote overview to {}", path.display()));
        }
        None => print!("{html}"),
    }

    Ok(())
}
