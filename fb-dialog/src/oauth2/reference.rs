//! Page copy: permission descriptions and the follow-up requests shown next
//! to the credential
//!
//! These snippets are documentation for the user; nothing here is executed.
//! The app secret is never read or handled: the token exchange snippet
//! carries a placeholder that the user fills in on their own backend.

use url::form_urlencoded;

use super::types::{ProviderConfig, ResponseMode};

/// Graph API host used by the reference snippets
pub const GRAPH_HOST: &str = "https://graph.facebook.com";

/// Placeholder shown where the app secret belongs
pub const APP_SECRET_PLACEHOLDER: &str = "YOUR_APP_SECRET";

/// Request the user runs next with the credential they received
///
/// Authorization-code mode shows the server-side code exchange; implicit
/// mode shows a direct Graph API call with the token.
#[must_use]
pub fn follow_up_request(config: &ProviderConfig, credential: &str) -> String {
    match config.response_mode {
        ResponseMode::AuthorizationCode => token_exchange_request(config, credential),
        ResponseMode::ImplicitToken => graph_api_request(config, credential),
    }
}

fn token_exchange_request(config: &ProviderConfig, code: &str) -> String {
    format!(
        "POST {GRAPH_HOST}/{version}/oauth/access_token\n\
         Content-Type: application/x-www-form-urlencoded\n\
         \n\
         client_id={client_id}&\n\
         client_secret={APP_SECRET_PLACEHOLDER}&\n\
         redirect_uri={redirect_uri}&\n\
         code={code}",
        version = config.api_version,
        client_id = config.client_id,
        redirect_uri = config.redirect_uri,
    )
}

fn graph_api_request(config: &ProviderConfig, token: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("fields", "id,name,email")
        .append_pair("access_token", token)
        .finish();

    format!("GET {GRAPH_HOST}/{}/me?{query}", config.api_version)
}

/// Steps listed under the credential
#[must_use]
pub const fn next_steps(mode: ResponseMode) -> &'static [&'static str] {
    match mode {
        ResponseMode::AuthorizationCode => &[
            "Copy the authorization code above",
            "Send it to your backend server",
            "Exchange the code for an access token using your app secret",
            "Use the access token for Facebook Graph API calls",
        ],
        ResponseMode::ImplicitToken => &[
            "Copy the access token above",
            "Pass it as access_token on Graph API requests",
            "Exchange it server-side for a long-lived token if you need one",
        ],
    }
}

/// Facts about the credential, as (label, description) pairs
#[must_use]
pub const fn credential_facts(mode: ResponseMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        ResponseMode::AuthorizationCode => &[
            ("Authorization Code", "Single-use, expires in ~10 minutes"),
            ("Requires Exchange", "Must be exchanged for an access token on your backend"),
            ("More Secure", "The app secret never reaches the browser"),
        ],
        ResponseMode::ImplicitToken => &[
            ("Access Token", "Short-lived user token, usable immediately"),
            ("No Exchange", "Works directly against the Graph API"),
            ("Handle With Care", "Anyone holding the token can act on the granted scopes"),
        ],
    }
}

/// What a known scope grants, for the permissions list
#[must_use]
pub fn scope_description(scope: &str) -> Option<&'static str> {
    match scope {
        "ads_read" => Some("Read access to your Facebook Ads data"),
        "ads_management" => Some("Create and manage your ad campaigns"),
        "business_management" => Some("Manage your Business Manager assets"),
        "email" => Some("Access to your email address"),
        "public_profile" => Some("Your name and profile picture"),
        "read_insights" => Some("Read insights for your Pages"),
        _ => None,
    }
}

/// Extra capability lines listed when the ads scope is requested
#[must_use]
pub fn ads_capabilities(scopes: &[String]) -> &'static [&'static str] {
    if scopes.iter().any(|scope| scope == "ads_read") {
        &[
            "View ad campaigns, ad sets, and ads performance",
            "Access insights and analytics data",
            "Read Business Manager information",
        ]
    } else {
        &[]
    }
}
