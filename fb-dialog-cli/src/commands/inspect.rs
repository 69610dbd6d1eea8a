//! Inspect a redirect URL without running the server
//!
//! Paste the address the browser landed on after the dialog; the command
//! runs the same parse and state check as the page.

use anyhow::{bail, Context, Result};
use console::style;
use fb_dialog::{
    clipboard::{Clipboard, SystemClipboard},
    config::FbDialogConfig,
    oauth2::{copy_credential, parse_callback, reference, validate, ViewState},
};
use url::Url;

/// Result of inspecting a redirect URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectOutcome {
    /// The URL carried a valid credential
    Authorized {
        /// Code or access token
        credential: String,
        /// Request to run next with it
        follow_up: String,
    },
    /// The provider reported an error or the state token did not match
    Failed(String),
    /// The URL carried no callback parameters
    NoCallback,
}

/// Decode a redirect URL
pub struct InspectCommand {
    redirect_url: String,
    copy: bool,
}

impl InspectCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(redirect_url: String, copy: bool) -> Self {
        Self { redirect_url, copy }
    }

    /// Parse and validate the redirect URL
    ///
    /// # Errors
    ///
    /// Returns error if the URL is not absolute
    pub fn run(&self, config: &FbDialogConfig) -> Result<InspectOutcome> {
        let location = Url::parse(&self.redirect_url)
            .with_context(|| format!("Not an absolute URL: {}", self.redirect_url))?;

        let payload = parse_callback(&location, config.facebook.response_mode);
        let outcome = match validate(payload, &config.facebook.state) {
            ViewState::Authorized { credential, .. } => InspectOutcome::Authorized {
                follow_up: reference::follow_up_request(&config.facebook, &credential),
                credential,
            },
            ViewState::Error { message } => InspectOutcome::Failed(message),
            ViewState::Idle => InspectOutcome::NoCallback,
        };

        Ok(outcome)
    }

    /// Execute the command
    ///
    /// With `--copy` on Linux the command stays up after copying until
    /// another application takes over the clipboard, since the text leaves
    /// with the process that owns it.
    pub fn execute(&self, config: &FbDialogConfig) -> Result<()> {
        let mut clipboard = SystemClipboard::persistent();
        let holds = clipboard.holds_until_replaced();
        self.report(config, &mut clipboard, holds)
    }

    /// Execute the command with a specific clipboard
    pub fn execute_with<C>(&self, config: &FbDialogConfig, clipboard: &mut C) -> Result<()>
    where
        C: Clipboard + ?Sized,
    {
        self.report(config, clipboard, false)
    }

    fn report<C>(&self, config: &FbDialogConfig, clipboard: &mut C, holds: bool) -> Result<()>
    where
        C: Clipboard + ?Sized,
    {
        let mode = config.facebook.response_mode;

        match self.run(config)? {
            InspectOutcome::Authorized {
                credential,
                follow_up,
            } => {
                eprintln!(
                    "{} {}",
                    style("✓").green().bold(),
                    style(format!("Received {}", mode.credential_label())).bold()
                );
                println!("{credential}");

                if self.copy {
                    if holds {
                        eprintln!(
                            "{}",
                            style("Waiting until another application takes over the clipboard")
                                .dim()
                        );
                    }
                    let view = ViewState::Authorized {
                        credential,
                        copied: false,
                    };
                    let view = copy_credential(clipboard, view, &config.facebook.state);
                    if matches!(view, ViewState::Authorized { copied: true, .. }) {
                        eprintln!("{}", style("Copied to clipboard").green());
                    } else {
                        eprintln!("{}", style("Could not copy to clipboard").yellow());
                    }
                }

                eprintln!();
                eprintln!("{}", style("Next:").bold());
                eprintln!("{}", style(follow_up).cyan());
                Ok(())
            }
            InspectOutcome::Failed(message) => bail!(message),
            InspectOutcome::NoCallback => bail!(
                "No callback parameters found (expected `{}` in the {})",
                mode.credential_key(),
                match mode {
                    fb_dialog::oauth2::ResponseMode::AuthorizationCode => "query string",
                    fb_dialog::oauth2::ResponseMode::ImplicitToken => "fragment",
                }
            ),
        }
    }
}
