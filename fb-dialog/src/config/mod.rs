//! Configuration management for fb-dialog
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `FB_DIALOG_` prefix, `__` for nesting)
//! 2. `FACEBOOK_APP_ID` / `FACEBOOK_REDIRECT_URI` from the hosting environment
//! 3. `./fb-dialog.toml`, or the file passed to [`FbDialogConfig::load_from`]
//! 4. `~/.config/fb-dialog/config.toml` (user config, XDG)
//! 5. Hardcoded defaults (fallback)
//!
//! Environment variable format: `FB_DIALOG_SECTION__FIELD_NAME`
//! - Use `__` (double underscore) to separate nested sections
//! - Example: `FB_DIALOG_FACEBOOK__RESPONSE_MODE=token`
//!
//! # Example Configuration
//!
//! ```toml
//! # fb-dialog.toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [facebook]
//! client_id = "your-facebook-app-id"
//! redirect_uri = "http://localhost:3000/"
//! scopes = ["ads_read", "email"]
//! response_mode = "code"
//!
//! [ui]
//! copy_feedback_ms = 3000
//! ```
//!
//! # Usage
//!
//! ```rust
//! use fb_dialog::config::FbDialogConfig;
//!
//! let config = FbDialogConfig::default();
//! assert_eq!(config.server.port, 3000);
//! assert_eq!(config.facebook.api_version, "v18.0");
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::FbDialogError;
use crate::oauth2::ProviderConfig;

/// Application name used for config paths
pub const APP_NAME: &str = "fb-dialog";

/// Local configuration file picked up from the working directory
pub const LOCAL_CONFIG_FILE: &str = "fb-dialog.toml";

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "FB_DIALOG_";

/// Hosting-environment variables mapped onto `[facebook]` keys
const HOSTING_ENV: [(&str, &str); 2] = [
    ("FACEBOOK_APP_ID", "facebook.client_id"),
    ("FACEBOOK_REDIRECT_URI", "facebook.redirect_uri"),
];

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_ms: 5000,
        }
    }
}

impl ServerSettings {
    /// Socket address to listen on
    ///
    /// # Errors
    ///
    /// Returns error if `host:port` is not a valid socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, FbDialogError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| FbDialogError::Config(format!("invalid server address: {e}")))
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Page behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// How long the "Copied!" feedback stays up, in milliseconds
    pub copy_feedback_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            copy_feedback_ms: 3000,
        }
    }
}

/// Complete fb-dialog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FbDialogConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Facebook dialog settings
    #[serde(default)]
    pub facebook: ProviderConfig,

    /// Page settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl FbDialogConfig {
    /// Load configuration from the default locations
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type
    pub fn load() -> Result<Self, FbDialogError> {
        let mut figment = Self::defaults()?;

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        Self::extract(figment)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override values from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or a
    /// value has the wrong type
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, FbDialogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FbDialogError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        Self::extract(Self::defaults()?.merge(Toml::file(path)))
    }

    /// Get the recommended XDG config path
    ///
    /// Returns `~/.config/fb-dialog/config.toml` on Linux.
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_CONFIG_FILE),
            |config_dir| config_dir.join(APP_NAME).join("config.toml"),
        )
    }

    /// Copy feedback delay as a [`Duration`]
    #[must_use]
    pub const fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.ui.copy_feedback_ms)
    }

    fn defaults() -> Result<Figment, FbDialogError> {
        let defaults = toml::to_string(&Self::default())
            .map_err(|e| FbDialogError::Config(e.to_string()))?;
        Ok(Figment::new().merge(Toml::string(&defaults)))
    }

    fn extract(figment: Figment) -> Result<Self, FbDialogError> {
        let config: Self = figment
            .merge(Self::hosting_env())
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        tracing::debug!(
            response_mode = %config.facebook.response_mode,
            api_version = %config.facebook.api_version,
            client_id_set = !config.facebook.client_id.is_empty(),
            "Configuration loaded"
        );

        Ok(config)
    }

    fn hosting_env() -> Env {
        Env::raw()
            .only(&HOSTING_ENV.map(|(var, _)| var))
            .map(|key| {
                HOSTING_ENV
                    .iter()
                    .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                    .map_or_else(|| key.as_str().into(), |(_, path)| (*path).into())
            })
    }
}
