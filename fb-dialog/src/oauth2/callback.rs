//! Callback parsing
//!
//! Facebook sends the flow result back in one of two places depending on the
//! requested response type: the query string for `code`, the fragment for
//! `token`. Only the site matching the configured mode is inspected; a
//! credential arriving in the other site is ignored.

use std::borrow::Cow;

use url::{form_urlencoded, Url};

use super::types::{CallbackPayload, ResponseMode};

/// Parameter names recognised in a callback
#[derive(Debug, Default)]
struct CallbackParams {
    credential: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
    state: Option<String>,
}

impl CallbackParams {
    fn collect<'a>(
        pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
        credential_key: &str,
    ) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            // First occurrence wins, and empty values count as absent.
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                "error" => &mut params.error,
                "error_description" => &mut params.error_description,
                "state" => &mut params.state,
                k if k == credential_key => &mut params.credential,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }
}

/// Parse the provider's callback out of the current page address
///
/// An `error` parameter takes priority over a credential. Without either,
/// the result is [`CallbackPayload::Absent`].
///
/// # Example
///
/// ```rust
/// use fb_dialog::oauth2::{parse_callback, CallbackPayload, ResponseMode};
/// use url::Url;
///
/// let location = Url::parse("https://app.example/#access_token=EAAB456&state=xyz").unwrap();
/// let payload = parse_callback(&location, ResponseMode::ImplicitToken);
///
/// assert_eq!(
///     payload,
///     CallbackPayload::Success {
///         credential: "EAAB456".to_string(),
///         state: Some("xyz".to_string()),
///     }
/// );
/// ```
#[must_use]
pub fn parse_callback(location: &Url, mode: ResponseMode) -> CallbackPayload {
    let component = match mode {
        ResponseMode::AuthorizationCode => location.query(),
        ResponseMode::ImplicitToken => location.fragment(),
    };

    let Some(component) = component else {
        return CallbackPayload::Absent;
    };

    let params = CallbackParams::collect(
        form_urlencoded::parse(component.as_bytes()),
        mode.credential_key(),
    );

    if let Some(code) = params.error {
        return CallbackPayload::ProviderError {
            code,
            description: params.error_description,
        };
    }

    params
        .credential
        .map_or(CallbackPayload::Absent, |credential| CallbackPayload::Success {
            credential,
            state: params.state,
        })
}
