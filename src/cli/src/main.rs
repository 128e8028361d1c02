//! Vantage CLI - one-shot deployment version overview in the terminal.
//!
//! Loads the grid configuration, polls every (service, environment) info
//! endpoint once, and prints or writes the resulting matrix.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use vantage_core::config::Config;

use commands::{config as config_cmd, overview, render};
use output::OutputFormat;

/// Vantage - deployment version overview
#[derive(Parser)]
#[command(
    name = "vantage",
    version = "0.1.0",
    about = "Polls service info endpoints across environments and shows a version matrix",
    propagate_version = true
)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, env = "VANTAGE_CONFIG")]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all service versions and show the grid
    Overview(overview::OverviewArgs),

    /// Fetch all service versions and write the HTML overview
    Render(render::RenderArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(config_cmd::ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli).await {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    let format = cli.output;

    match cli.command {
        Commands::Overview(args) => overview::execute(args, &config, format).await,
        Commands::Render(args) => render::execute(args, &config).await,
        Commands::Config(cmd) => config_cmd::execute(cmd, &config, format),
    }
}
