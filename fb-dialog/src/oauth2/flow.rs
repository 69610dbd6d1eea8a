//! View-state machine for the dialog flow
//!
//! The page shows exactly one of three states. Every change goes through
//! [`ViewState::update`], which consumes the current value and returns the
//! next one:
//!
//! ```text
//!            CallbackLoaded(payload)
//!   Idle ──────────────────────────────▶ Error | Authorized
//!    ▲                                        │
//!    └──────────────── Reset ◀────────────────┘
//! ```
//!
//! `Copied` and `CopyExpired` only toggle the display flag of `Authorized`.

use serde::Serialize;

use super::types::{CallbackPayload, FlowError};
use crate::clipboard::Clipboard;

/// Description used when the provider omits `error_description`
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// What the page currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewState {
    /// Connect button
    #[default]
    Idle,
    /// Flow failed; `message` is shown verbatim
    Error {
        /// User-facing message
        message: String,
    },
    /// Flow succeeded
    Authorized {
        /// Code or access token to display
        credential: String,
        /// Whether the "Copied!" feedback is showing
        copied: bool,
    },
}

/// Input to [`ViewState::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Page load delivered its callback payload
    CallbackLoaded(CallbackPayload),
    /// The credential reached the clipboard
    Copied,
    /// The copy feedback delay elapsed
    CopyExpired,
    /// User asked to start over
    Reset,
}

impl ViewState {
    /// Apply `action` and return the next state
    ///
    /// Callbacks are only honoured from `Idle`; a payload arriving in a
    /// terminal state leaves it untouched.
    #[must_use]
    pub fn update(self, action: Action, expected_state: &str) -> Self {
        match (self, action) {
            (Self::Idle, Action::CallbackLoaded(payload)) => validate(payload, expected_state),
            (_, Action::Reset) => reset(),
            (Self::Authorized { credential, .. }, Action::Copied) => Self::Authorized {
                credential,
                copied: true,
            },
            (Self::Authorized { credential, .. }, Action::CopyExpired) => Self::Authorized {
                credential,
                copied: false,
            },
            (state, _) => state,
        }
    }

    /// Credential held by `Authorized`
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        match self {
            Self::Authorized { credential, .. } => Some(credential),
            _ => None,
        }
    }

    /// Whether the state is `Idle`
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Short name for logs; never includes the credential
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Error { .. } => "error",
            Self::Authorized { .. } => "authorized",
        }
    }
}

/// Map a parsed callback to the view it produces
///
/// `Authorized` is only produced when the returned `state` equals
/// `expected_state`.
#[must_use]
pub fn validate(payload: CallbackPayload, expected_state: &str) -> ViewState {
    match check(payload, expected_state) {
        Ok(Some(credential)) => ViewState::Authorized {
            credential,
            copied: false,
        },
        Ok(None) => ViewState::Idle,
        Err(err) => ViewState::Error {
            message: err.to_string(),
        },
    }
}

fn check(payload: CallbackPayload, expected_state: &str) -> Result<Option<String>, FlowError> {
    match payload {
        CallbackPayload::ProviderError { code, description } => Err(FlowError::ProviderDenied {
            code,
            description: description.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        }),
        CallbackPayload::Success { credential, state } => {
            if state.as_deref() == Some(expected_state) {
                Ok(Some(credential))
            } else {
                tracing::warn!(
                    received = state.as_deref().unwrap_or("<none>"),
                    "OAuth2 state mismatch (potential CSRF attack)"
                );
                Err(FlowError::StateMismatch)
            }
        }
        CallbackPayload::Absent => Ok(None),
    }
}

/// Clear any held credential or error
#[must_use]
pub const fn reset() -> ViewState {
    ViewState::Idle
}

/// Put the credential on the clipboard and flip `copied` on success
///
/// Clipboard failures are logged and leave the state unchanged; the copy
/// feedback is cosmetic.
#[must_use]
pub fn copy_credential<C>(clipboard: &mut C, state: ViewState, expected_state: &str) -> ViewState
where
    C: Clipboard + ?Sized,
{
    let Some(credential) = state.credential().map(str::to_owned) else {
        return state;
    };

    match clipboard.set_text(&credential) {
        Ok(()) => state.update(Action::Copied, expected_state),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to copy credential to clipboard");
            state
        }
    }
}
