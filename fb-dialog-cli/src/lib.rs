//! fb-dialog CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;

use anyhow::Result;
use fb_dialog::config::FbDialogConfig;
use std::path::Path;

pub use commands::{ConfigCommand, InspectCommand, InspectOutcome, ServeCommand, UrlCommand};

/// Load configuration from `path`, or from the default locations
///
/// # Errors
///
/// Returns error if the file is missing or a value has the wrong type
pub fn load_config(path: Option<&Path>) -> Result<FbDialogConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            FbDialogConfig::load_from(path)?
        }
        None => FbDialogConfig::load()?,
    };
    Ok(config)
}
