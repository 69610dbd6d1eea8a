//! Facebook OAuth2 dialog flow
//!
//! This module holds everything the page needs to run the flow, independent
//! of the web layer:
//! - Building the dialog URL from configuration
//! - Parsing the provider's callback out of the page address
//! - Validating the anti-forgery `state` token
//! - The three-state view model and its update function
//!
//! # Example Usage
//!
//! ```rust
//! use fb_dialog::oauth2::{
//!     build_authorization_url, parse_callback, Action, ProviderConfig, ViewState,
//! };
//! use url::Url;
//!
//! let config = ProviderConfig {
//!     client_id: "1234".to_string(),
//!     redirect_uri: "https://app.example/".to_string(),
//!     ..ProviderConfig::default()
//! };
//!
//! // Send the user here
//! let dialog = build_authorization_url(&config).unwrap();
//! assert!(dialog.contains("response_type=code"));
//!
//! // ...and handle the address they come back on
//! let location =
//!     Url::parse("https://app.example/?code=AQD123&state=facebook_oauth_security_token").unwrap();
//! let payload = parse_callback(&location, config.response_mode);
//! let view = ViewState::Idle.update(Action::CallbackLoaded(payload), &config.state);
//!
//! assert_eq!(view.credential(), Some("AQD123"));
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [facebook]
//! client_id = "your-facebook-app-id"
//! redirect_uri = "http://localhost:3000/"
//! scopes = ["ads_read", "email"]
//! response_mode = "code"   # or "token"
//! state = "facebook_oauth_security_token"
//! api_version = "v18.0"
//! ```
//!
//! # Security Considerations
//!
//! - **State Token**: the `state` value is compared verbatim against the
//!   configured token; any mismatch is treated as a forged callback
//! - **App Secret**: never handled here; code exchange belongs on a backend

pub mod callback;
pub mod dialog;
pub mod flow;
pub mod reference;
pub mod types;

pub use callback::parse_callback;
pub use dialog::build_authorization_url;
pub use flow::{copy_credential, reset, validate, Action, ViewState};
pub use types::{CallbackPayload, FlowError, ProviderConfig, ResponseMode};
