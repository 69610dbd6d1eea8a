//! Show the effective configuration

use anyhow::{Context, Result};
use console::style;
use fb_dialog::config::FbDialogConfig;

/// Print configuration after every layer has been applied
pub struct ConfigCommand;

impl ConfigCommand {
    /// Render `config` as TOML
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn run(config: &FbDialogConfig) -> Result<String> {
        toml::to_string_pretty(config).context("Failed to serialize configuration")
    }

    /// Execute the command
    pub fn execute(config: &FbDialogConfig) -> Result<()> {
        println!(
            "{} {}",
            style("# user config:").dim(),
            style(FbDialogConfig::recommended_path().display()).dim()
        );
        print!("{}", Self::run(config)?);
        Ok(())
    }
}
