//! fb-dialog: Facebook OAuth dialog helper for the Marketing API
//!
//! Sends the user through Facebook's login dialog, reads the authorization
//! code (or access token) out of the redirect, checks the anti-forgery
//! `state` token, and shows the credential with a copy button. The page is
//! server-rendered with askama and driven by htmx.
//!
//! # Design Principles
//!
//! 1. **Pure Core**: URL building, callback parsing and the view-state machine
//!    in [`oauth2`] have no I/O
//! 2. **One Actor**: a single view state lives on the server; every route
//!    moves it forward through [`state::FbDialogState::dispatch`]
//! 3. **No Secrets**: the app secret is never read; code exchange belongs on
//!    the user's backend
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fb_dialog::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     fb_dialog::observability::init()?;
//!
//!     let config = FbDialogConfig::load()?;
//!     fb_dialog::server::serve(config).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! See [`config`] for the file format and environment overrides. The two
//! required values are usually supplied as `FACEBOOK_APP_ID` and
//! `FACEBOOK_REDIRECT_URI`.

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::missing_errors_doc)]

// Public modules (exported in public API)
pub mod clipboard;
pub mod config;
pub mod error;
pub mod handlers;
pub mod oauth2;
pub mod observability;
pub mod server;
pub mod state;
pub mod template;

#[cfg(test)]
pub mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use fb_dialog::prelude::*;
    //!
    //! let config = FbDialogConfig::default();
    //! assert_eq!(config.facebook.response_mode, ResponseMode::AuthorizationCode);
    //! ```

    // Flow core
    pub use crate::oauth2::{
        build_authorization_url, copy_credential, parse_callback, reset, validate, Action,
        CallbackPayload, FlowError, ProviderConfig, ResponseMode, ViewState,
    };

    // Configuration
    pub use crate::config::FbDialogConfig;

    // Error types
    pub use crate::error::FbDialogError;

    // Application state
    pub use crate::state::FbDialogState;

    // Clipboard
    pub use crate::clipboard::{Clipboard, ClipboardError, SystemClipboard};

    // Templates
    pub use crate::template::HxTemplate;
}
