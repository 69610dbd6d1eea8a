//! Facebook login dialog URL

use url::form_urlencoded;
use validator::Validate;

use super::types::{FlowError, ProviderConfig};

/// Host serving the OAuth dialog
pub const DIALOG_HOST: &str = "https://www.facebook.com";

/// Build the provider's dialog URL from configuration
///
/// Pure function of `config`: the same configuration always yields the same
/// bytes. No network access happens here; the caller navigates to the result.
///
/// # Errors
///
/// Returns [`FlowError::ConfigurationMissing`] if the app ID or redirect URI
/// is unset, and [`FlowError::InvalidConfiguration`] if the remaining
/// settings fail validation.
///
/// # Example
///
/// ```rust
/// use fb_dialog::oauth2::{build_authorization_url, ProviderConfig};
///
/// let config = ProviderConfig {
///     client_id: "1234".to_string(),
///     redirect_uri: "https://app.example/".to_string(),
///     ..ProviderConfig::default()
/// };
///
/// let url = build_authorization_url(&config).unwrap();
/// assert!(url.starts_with("https://www.facebook.com/v18.0/dialog/oauth?client_id=1234"));
/// ```
pub fn build_authorization_url(config: &ProviderConfig) -> Result<String, FlowError> {
    if let Some(field) = config.missing_field() {
        return Err(FlowError::ConfigurationMissing { field });
    }

    config
        .validate()
        .map_err(|e| FlowError::InvalidConfiguration(e.to_string()))?;

    let scope = config.scope_param();
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("scope", &scope)
        .append_pair("response_type", config.response_mode.response_type())
        .append_pair("state", &config.state)
        .finish();

    Ok(format!(
        "{DIALOG_HOST}/{}/dialog/oauth?{query}",
        config.api_version
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oauth2::types::ResponseMode;
    use proptest::prelude::*;

    fn configured() -> ProviderConfig {
        ProviderConfig {
            client_id: "987654321".to_string(),
            redirect_uri: "http://localhost:3000/".to_string(),
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn test_code_mode_url() {
        let url = build_authorization_url(&configured()).unwrap();
        assert_eq!(
            url,
            "https://www.facebook.com/v18.0/dialog/oauth?client_id=987654321\
             &redirect_uri=http%3A%2F%2Flocalhost%3A3000%2F\
             &scope=ads_read%2Cemail\
             &response_type=code\
             &state=facebook_oauth_security_token"
        );
    }

    #[test]
    fn test_token_mode_uses_token_response_type() {
        let config = ProviderConfig {
            response_mode: ResponseMode::ImplicitToken,
            api_version: "v19.0".to_string(),
            ..configured()
        };
        let url = build_authorization_url(&config).unwrap();
        assert!(url.starts_with("https://www.facebook.com/v19.0/dialog/oauth?"));
        assert!(url.contains("&response_type=token&"));
    }

    #[test]
    fn test_missing_client_id() {
        let config = ProviderConfig {
            client_id: String::new(),
            ..configured()
        };
        assert_eq!(
            build_authorization_url(&config),
            Err(FlowError::ConfigurationMissing {
                field: "Facebook App ID"
            })
        );
    }

    #[test]
    fn test_missing_redirect_uri() {
        let config = ProviderConfig {
            redirect_uri: "   ".to_string(),
            ..configured()
        };
        assert_eq!(
            build_authorization_url(&config),
            Err(FlowError::ConfigurationMissing {
                field: "Facebook redirect URI"
            })
        );
    }

    #[test]
    fn test_relative_redirect_uri_is_invalid() {
        let config = ProviderConfig {
            redirect_uri: "/callback".to_string(),
            ..configured()
        };
        assert!(matches!(
            build_authorization_url(&config),
            Err(FlowError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_empty_scopes_are_invalid() {
        let config = ProviderConfig {
            scopes: vec![],
            ..configured()
        };
        assert!(matches!(
            build_authorization_url(&config),
            Err(FlowError::InvalidConfiguration(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_url_is_deterministic(
            client_id in "[0-9]{1,20}",
            path in "[a-z/]{0,12}",
            scopes in proptest::collection::vec("[a-z_]{1,12}", 1..5),
        ) {
            let config = ProviderConfig {
                client_id,
                redirect_uri: format!("https://app.example/{path}"),
                scopes,
                ..ProviderConfig::default()
            };

            let first = build_authorization_url(&config).unwrap();
            let second = build_authorization_url(&config.clone()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_redirect_uri_round_trips(path in "[a-zA-Z0-9 ?&=#/]{0,24}") {
            let redirect_uri = format!("https://app.example/{path}");
            let config = ProviderConfig {
                client_id: "42".to_string(),
                redirect_uri: redirect_uri.clone(),
                ..ProviderConfig::default()
            };

            let built = build_authorization_url(&config);
            // Some generated paths are not valid URLs; those must fail closed.
            if let Ok(built) = built {
                let parsed = url::Url::parse(&built).unwrap();
                let decoded = parsed
                    .query_pairs()
                    .find(|(k, _)| k == "redirect_uri")
                    .map(|(_, v)| v.into_owned());
                prop_assert_eq!(decoded, Some(redirect_uri));
            }
        }
    }
}
