//! Askama templates for the page and its three views
//!
//! The full page ([`PageTemplate`]) wraps a panel. Every htmx interaction
//! swaps only the panel, rendered by [`render_view`] from the current
//! [`ViewState`].
//!
//! # Examples
//!
//! ```rust
//! use fb_dialog::{config::FbDialogConfig, oauth2::ViewState, template::render_view};
//!
//! let config = FbDialogConfig::default();
//! let html = render_view(&ViewState::Idle, &config, None).unwrap();
//! assert!(html.contains("Connect with Facebook"));
//! ```

use askama::Template;
use axum::response::Html;

use crate::{
    config::FbDialogConfig,
    error::FbDialogError,
    oauth2::{reference, ResponseMode, ViewState},
};

/// Extension trait for rendering straight into an axum response body
pub trait HxTemplate: Template {
    /// Render as an HTML response body
    ///
    /// # Errors
    ///
    /// Returns [`FbDialogError::Template`] if rendering fails
    fn render_html(&self) -> Result<Html<String>, FbDialogError> {
        Ok(Html(self.render()?))
    }
}

impl<T: Template> HxTemplate for T {}

/// Full page shell; posts its own address to `/callback` on load
#[derive(Template)]
#[template(path = "index.html")]
pub struct PageTemplate {
    /// Line under the page title
    pub subtitle: String,
    /// Pre-rendered panel markup
    pub panel: String,
    /// Whether the page posts its address to `/callback` once loaded
    pub post_location: bool,
}

impl PageTemplate {
    /// Wrap an already rendered panel
    #[must_use]
    pub fn new(config: &FbDialogConfig, panel: String) -> Self {
        let subtitle = match config.facebook.response_mode {
            ResponseMode::AuthorizationCode => {
                "Authorization code generator for Facebook Marketing API".to_string()
            }
            ResponseMode::ImplicitToken => {
                "Access token generator for Facebook Marketing API".to_string()
            }
        };
        Self {
            subtitle,
            panel,
            post_location: true,
        }
    }
}

/// Connect button, requested permissions, setup checklist
#[derive(Template)]
#[template(path = "panels/idle.html")]
pub struct IdleTemplate<'a> {
    /// Scopes the dialog will ask for, with a description when known
    pub scopes: Vec<(&'a str, Option<&'static str>)>,
    /// What the requested scopes let the app do
    pub capabilities: &'static [&'static str],
    /// Inline configuration problem from a failed connect
    pub config_error: Option<&'a str>,
}

impl<'a> IdleTemplate<'a> {
    /// Build the connect panel
    #[must_use]
    pub fn new(config: &'a FbDialogConfig, config_error: Option<&'a str>) -> Self {
        let scopes = &config.facebook.scopes;
        Self {
            scopes: scopes
                .iter()
                .map(|scope| (scope.as_str(), reference::scope_description(scope)))
                .collect(),
            capabilities: reference::ads_capabilities(scopes),
            config_error,
        }
    }
}

/// Error message and a way back to the start
#[derive(Template)]
#[template(path = "panels/error.html")]
pub struct ErrorTemplate<'a> {
    /// Message shown verbatim
    pub message: &'a str,
}

/// Credential display with copy/reset controls and reference material
#[derive(Template)]
#[template(path = "panels/authorized.html")]
pub struct AuthorizedTemplate<'a> {
    /// Code or access token, shown verbatim
    pub credential: &'a str,
    /// Whether the "Copied!" feedback is up
    pub copied: bool,
    /// Delay before the feedback clears itself
    pub copy_feedback_ms: u128,
    /// Lowercase credential name used in running text
    pub credential_label: &'static str,
    /// Credential name used in headings
    pub credential_title: &'static str,
    /// Short noun on the copy button
    pub copy_noun: &'static str,
    /// Line under the success heading
    pub instructions: &'static str,
    /// Heading over the follow-up request
    pub follow_up_title: &'static str,
    /// Request to run next with the credential
    pub follow_up: String,
    /// Ordered next steps
    pub next_steps: &'static [&'static str],
    /// (label, description) facts about the credential
    pub facts: &'static [(&'static str, &'static str)],
    /// Granted scopes, comma separated
    pub scope: String,
}

impl<'a> AuthorizedTemplate<'a> {
    /// Build the success panel for `credential`
    #[must_use]
    pub fn new(config: &FbDialogConfig, credential: &'a str, copied: bool) -> Self {
        let provider = &config.facebook;
        let mode = provider.response_mode;
        let (credential_title, copy_noun, instructions, follow_up_title) = match mode {
            ResponseMode::AuthorizationCode => (
                "Authorization Code",
                "Code",
                "Exchange this code for an access token using your backend server",
                "Token Exchange Example",
            ),
            ResponseMode::ImplicitToken => (
                "Access Token",
                "Token",
                "Use this token directly against the Graph API",
                "Graph API Example",
            ),
        };

        Self {
            credential,
            copied,
            copy_feedback_ms: config.copy_feedback().as_millis(),
            credential_label: mode.credential_label(),
            credential_title,
            copy_noun,
            instructions,
            follow_up_title,
            follow_up: reference::follow_up_request(provider, credential),
            next_steps: reference::next_steps(mode),
            facts: reference::credential_facts(mode),
            scope: provider.scopes.join(", "),
        }
    }
}

/// Render the panel for `view`
///
/// `config_error` is only shown in the idle view, under the connect button.
///
/// # Errors
///
/// Returns [`FbDialogError::Template`] if rendering fails
pub fn render_view(
    view: &ViewState,
    config: &FbDialogConfig,
    config_error: Option<&str>,
) -> Result<String, FbDialogError> {
    let html = match view {
        ViewState::Idle => IdleTemplate::new(config, config_error).render()?,
        ViewState::Error { message } => ErrorTemplate { message }.render()?,
        ViewState::Authorized { credential, copied } => {
            AuthorizedTemplate::new(config, credential, *copied).render()?
        }
    };

    Ok(html)
}

/// Render the full page around the panel for `view`
///
/// A page carrying `config_error` does not post its address on load, so the
/// message stays in place instead of being replaced by a fresh idle panel.
///
/// # Errors
///
/// Returns [`FbDialogError::Template`] if rendering fails
pub fn render_page(
    view: &ViewState,
    config: &FbDialogConfig,
    config_error: Option<&str>,
) -> Result<Html<String>, FbDialogError> {
    let panel = render_view(view, config, config_error)?;
    let page = PageTemplate {
        post_location: config_error.is_none(),
        ..PageTemplate::new(config, panel)
    };
    page.render_html()
}
