//! Local server command

use anyhow::Result;
use console::style;
use fb_dialog::config::FbDialogConfig;

/// Serve the dialog page
pub struct ServeCommand {
    host: Option<String>,
    port: Option<u16>,
}

impl ServeCommand {
    /// Create a new command instance with optional bind overrides
    #[must_use]
    pub const fn new(host: Option<String>, port: Option<u16>) -> Self {
        Self { host, port }
    }

    /// Apply the command-line overrides to `config`
    #[must_use]
    pub fn apply(&self, mut config: FbDialogConfig) -> FbDialogConfig {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config
    }

    /// Execute the command
    pub async fn execute(&self, config: FbDialogConfig) -> Result<()> {
        let config = self.apply(config);

        println!(
            "{} {}",
            style("Starting").green().bold(),
            style(format!(
                "fb-dialog on http://{}:{}",
                config.server.host, config.server.port
            ))
            .bold()
        );
        if let Some(field) = config.facebook.missing_field() {
            println!(
                "{} {} is not set; set FACEBOOK_APP_ID and FACEBOOK_REDIRECT_URI",
                style("warning:").yellow().bold(),
                field
            );
        }
        println!();

        fb_dialog::observability::init()?;
        fb_dialog::server::serve(config).await?;
        Ok(())
    }
}
