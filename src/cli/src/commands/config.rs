//! Configuration inspection commands.

use anyhow::Result;
use clap::Subcommand;

use vantage_core::config::Config;

use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Check the configuration for structural errors
    Validate,
}

pub fn execute(cmd: ConfigCommands, config: &Config, format: OutputFormat) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            output::print_item(config, format);
            Ok(())
        }
        ConfigCommands::Validate => {
            config.overview.validate()?;
            output::print_success(&format!(
                "Configuration OK: {} web services x {} environments",
                config.overview.web_services.len(),
                config.overview.environments.len()
            ));
            Ok(())
        }
    }
}
