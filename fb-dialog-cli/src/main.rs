//! fb-dialog CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use fb_dialog_cli_lib::{load_config, ConfigCommand, InspectCommand, ServeCommand, UrlCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fb-dialog")]
#[command(version)]
#[command(about = "Get a Facebook authorization code or access token", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./fb-dialog.toml and the user config)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dialog page
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to bind
        #[arg(long, short)]
        port: Option<u16>,
    },
    /// Print the Facebook login dialog URL
    Url,
    /// Decode a redirect URL and check its state token
    Inspect {
        /// Address the browser landed on after the dialog
        redirect_url: String,
        /// Copy the credential to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            ServeCommand::new(host, port).execute(config).await?;
        }
        Commands::Url => {
            UrlCommand::execute(&config)?;
        }
        Commands::Inspect { redirect_url, copy } => {
            InspectCommand::new(redirect_url, copy).execute(&config)?;
        }
        Commands::Config => {
            ConfigCommand::execute(&config)?;
        }
    }

    Ok(())
}
