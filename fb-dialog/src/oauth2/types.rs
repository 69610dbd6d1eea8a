//! Core OAuth2 types and configuration
//!
//! This module defines the foundational types for the Facebook dialog flow:
//! the provider configuration, the decoded callback payload, and the flow
//! error taxonomy.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Default anti-forgery token round-tripped through the provider
pub const DEFAULT_STATE_TOKEN: &str = "facebook_oauth_security_token";

/// Default Graph API version used in dialog and reference URLs
pub const DEFAULT_API_VERSION: &str = "v18.0";

/// Which credential the provider hands back, and where it puts it
///
/// Configuration values go through [`FromStr`], so `implicit`, `TOKEN` and
/// the other aliases are accepted wherever `code` and `token` are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ResponseMode {
    /// `response_type=code`; the callback carries `code` in the query string
    #[default]
    #[serde(rename = "code")]
    AuthorizationCode,
    /// `response_type=token`; the callback carries `access_token` in the fragment
    #[serde(rename = "token")]
    ImplicitToken,
}

impl ResponseMode {
    /// Value sent as `response_type` in the dialog URL
    #[must_use]
    pub const fn response_type(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "code",
            Self::ImplicitToken => "token",
        }
    }

    /// Callback parameter holding the credential
    #[must_use]
    pub const fn credential_key(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "code",
            Self::ImplicitToken => "access_token",
        }
    }

    /// Human-readable name of the credential, used in page copy
    #[must_use]
    pub const fn credential_label(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization code",
            Self::ImplicitToken => "access token",
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.response_type())
    }
}

impl FromStr for ResponseMode {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" | "authorization_code" => Ok(Self::AuthorizationCode),
            "token" | "implicit" | "implicit_token" => Ok(Self::ImplicitToken),
            _ => Err(FlowError::InvalidConfiguration(format!(
                "unknown response mode: {s}"
            ))),
        }
    }
}

impl TryFrom<String> for ResponseMode {
    type Error = FlowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Configuration for the Facebook OAuth dialog
///
/// Built once at startup and never mutated afterwards. `client_id` and
/// `redirect_uri` come from the hosting environment and may be empty; that
/// is reported when the flow is initiated, not when configuration loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProviderConfig {
    /// Facebook App ID
    #[serde(deserialize_with = "string_or_number")]
    pub client_id: String,
    /// Redirect URI; must exactly match the one registered with the app
    #[validate(url(message = "redirect URI must be an absolute URL"))]
    pub redirect_uri: String,
    /// Permissions to request, in order
    #[validate(length(min = 1, message = "at least one scope must be requested"))]
    pub scopes: Vec<String>,
    /// Code or implicit-token variant
    pub response_mode: ResponseMode,
    /// Anti-forgery token sent as `state`
    #[validate(length(min = 1, message = "state token must not be empty"))]
    pub state: String,
    /// Graph API version, e.g. `v18.0`
    #[validate(length(min = 1, message = "API version must not be empty"))]
    pub api_version: String,
}

/// App IDs are numeric, so env and TOML sources may hand them over as integers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            redirect_uri: String::new(),
            scopes: vec!["ads_read".to_string(), "email".to_string()],
            response_mode: ResponseMode::default(),
            state: DEFAULT_STATE_TOKEN.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl ProviderConfig {
    /// Scopes joined the way the dialog expects them
    #[must_use]
    pub fn scope_param(&self) -> String {
        self.scopes.join(",")
    }

    /// Return the first required value that is unset, if any
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.client_id.trim().is_empty() {
            Some("Facebook App ID")
        } else if self.redirect_uri.trim().is_empty() {
            Some("Facebook redirect URI")
        } else {
            None
        }
    }
}

/// Decoded result of parsing the redirect address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackPayload {
    /// The provider issued a credential
    Success {
        /// Authorization code or access token, URL-decoded
        credential: String,
        /// The `state` value that came back, if any
        state: Option<String>,
    },
    /// The provider reported an error
    ProviderError {
        /// Value of the `error` parameter
        code: String,
        /// Value of `error_description`, if present
        description: Option<String>,
    },
    /// No callback parameters (first visit)
    Absent,
}

impl CallbackPayload {
    /// Whether this payload came from a real provider redirect
    #[must_use]
    pub const fn is_callback(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Flow errors, surfaced to the user as plain text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// App ID or redirect URI is unset
    #[error("{field} is not configured. Set it in fb-dialog.toml or the environment.")]
    ConfigurationMissing {
        /// Which setting is missing
        field: &'static str,
    },

    /// Configuration is present but unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The provider returned an `error` parameter
    #[error("{code} - {description}")]
    ProviderDenied {
        /// Provider error code
        code: String,
        /// Provider description, or `Unknown error`
        description: String,
    },

    /// State token mismatch (potential CSRF attack)
    #[error("Invalid state parameter. Possible CSRF attack.")]
    StateMismatch,
}
