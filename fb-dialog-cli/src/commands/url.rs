//! Print the login dialog URL

use anyhow::Result;
use fb_dialog::{config::FbDialogConfig, oauth2::build_authorization_url};

/// Print the URL the connect button would navigate to
pub struct UrlCommand;

impl UrlCommand {
    /// Build the dialog URL for `config`
    ///
    /// # Errors
    ///
    /// Returns error if the app ID or redirect URI is missing or invalid
    pub fn run(config: &FbDialogConfig) -> Result<String> {
        Ok(build_authorization_url(&config.facebook)?)
    }

    /// Execute the command
    pub fn execute(config: &FbDialogConfig) -> Result<()> {
        println!("{}", Self::run(config)?);
        Ok(())
    }
}
