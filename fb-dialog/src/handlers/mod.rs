//! HTTP handlers for the dialog page
//!
//! Every handler moves the shared [`ViewState`](crate::oauth2::ViewState)
//! forward and renders the resulting panel; only [`index`] renders the full
//! page.
//!
//! # Example Usage
//!
//! ```rust
//! use axum::{routing::{get, post}, Router};
//! use fb_dialog::{config::FbDialogConfig, handlers, state::FbDialogState};
//!
//! let state = FbDialogState::new(FbDialogConfig::default());
//! let app: Router = Router::new()
//!     .route("/", get(handlers::index))
//!     .route("/callback", post(handlers::callback))
//!     .route("/connect", get(handlers::connect))
//!     .with_state(state);
//! ```

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_htmx::{HxRedirect, HxReplaceUrl, HxRequest};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::FbDialogError,
    oauth2::{build_authorization_url, parse_callback, Action},
    state::FbDialogState,
    template::{render_page, render_view},
};

/// Body of `POST /callback`
#[derive(Debug, Deserialize)]
pub struct CallbackForm {
    /// Full page address as the browser sees it, fragment included
    pub location: String,
}

/// Response for the health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the server answers
    pub status: String,
    /// Crate version
    pub version: String,
}

/// Render the full page
///
/// A fresh page load starts a fresh session, so the view is reset first.
/// The page then posts its own address to [`callback`].
///
/// # Errors
///
/// Returns [`FbDialogError::Template`] if rendering fails
pub async fn index(State(state): State<FbDialogState>) -> Result<Html<String>, FbDialogError> {
    let view = state.dispatch(Action::Reset);
    render_page(&view, state.config(), None)
}

/// Handle the page address posted on load
///
/// Parses the callback out of the address, validates it, and renders the
/// resulting panel. After a real provider redirect the response carries
/// `HX-Replace-Url` with the bare path so the credential leaves the address
/// bar and history.
///
/// # Errors
///
/// Returns [`FbDialogError::BadRequest`] if `location` is not an absolute URL
///
/// # Example
///
/// ```bash
/// POST /callback
/// location=https://app.example/?code=AQD123&state=facebook_oauth_security_token
/// ```
pub async fn callback(
    State(state): State<FbDialogState>,
    Form(form): Form<CallbackForm>,
) -> Result<Response, FbDialogError> {
    let location = Url::parse(&form.location)
        .map_err(|e| FbDialogError::BadRequest(format!("invalid location: {e}")))?;

    let payload = parse_callback(&location, state.config().facebook.response_mode);
    let is_callback = payload.is_callback();
    let view = state.dispatch(Action::CallbackLoaded(payload));
    let panel = Html(render_view(&view, state.config(), None)?);

    if !is_callback {
        return Ok(panel.into_response());
    }

    tracing::info!(view = view.name(), "OAuth callback handled");
    Ok((HxReplaceUrl::from(location.path()), panel).into_response())
}

/// Start the dialog flow
///
/// htmx requests get `HX-Redirect`; plain requests get a `303 See Other`.
/// If configuration is incomplete nothing navigates: the idle panel comes
/// back with the problem shown under the connect button.
///
/// # Errors
///
/// Returns [`FbDialogError::Template`] if rendering the idle panel fails
pub async fn connect(
    State(state): State<FbDialogState>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, FbDialogError> {
    let view = state.dispatch(Action::Reset);

    match build_authorization_url(&state.config().facebook) {
        Ok(url) => {
            tracing::info!(
                response_mode = %state.config().facebook.response_mode,
                "Redirecting to Facebook login dialog"
            );
            if is_htmx {
                Ok((HxRedirect::from(url.as_str()), ()).into_response())
            } else {
                Ok(Redirect::to(&url).into_response())
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "Cannot start OAuth flow");
            let message = err.to_string();
            if is_htmx {
                let panel = render_view(&view, state.config(), Some(&message))?;
                Ok(Html(panel).into_response())
            } else {
                Ok(render_page(&view, state.config(), Some(&message))?.into_response())
            }
        }
    }
}

/// Copy the credential to the clipboard
///
/// # Errors
///
/// Returns error if the clipboard task fails or rendering fails
pub async fn copy(State(state): State<FbDialogState>) -> Result<Html<String>, FbDialogError> {
    let view = state.copy().await?;
    Ok(Html(render_view(&view, state.config(), None)?))
}

/// Clear the "Copied!" feedback
///
/// # Errors
///
/// Returns [`FbDialogError::Template`] if rendering fails
pub async fn copy_expire(
    State(state): State<FbDialogState>,
) -> Result<Html<String>, FbDialogError> {
    let view = state.dispatch(Action::CopyExpired);
    Ok(Html(render_view(&view, state.config(), None)?))
}

/// Drop any credential or error and show the connect button again
///
/// # Errors
///
/// Returns [`FbDialogError::Template`] if rendering fails
pub async fn reset(State(state): State<FbDialogState>) -> Result<Html<String>, FbDialogError> {
    let view = state.dispatch(Action::Reset);
    tracing::debug!("Flow reset");
    Ok(Html(render_view(&view, state.config(), None)?))
}

/// Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
