//! Router assembly and the HTTP server loop

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::FbDialogConfig, error::FbDialogError, handlers, state::FbDialogState};

/// Build the application router
///
/// # Example
///
/// ```rust
/// use fb_dialog::{config::FbDialogConfig, server, state::FbDialogState};
///
/// let app = server::router(FbDialogState::new(FbDialogConfig::default()));
/// # let _ = app;
/// ```
pub fn router(state: FbDialogState) -> Router {
    let timeout = state.config().server.request_timeout();

    Router::new()
        .route("/", get(handlers::index))
        .route("/callback", post(handlers::callback))
        .route("/connect", get(handlers::connect))
        .route("/copy", post(handlers::copy))
        .route("/copy/expire", post(handlers::copy_expire))
        .route("/reset", post(handlers::reset))
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns error if the address is invalid or cannot be bound
pub async fn serve(config: FbDialogConfig) -> Result<(), FbDialogError> {
    let addr = config.server.socket_addr()?;

    if let Some(field) = config.facebook.missing_field() {
        tracing::warn!(field, "Facebook configuration incomplete; connecting will fail");
    }

    let app = router(FbDialogState::new(config));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received, shutting down server gracefully");
}

#[cfg(test)]
mod tests {
    use crate::{
        config::FbDialogConfig,
        oauth2::{build_authorization_url, ResponseMode, ViewState},
        testing::{
            assert_hx_redirect, assert_hx_replace_url, assert_no_hx_replace_url,
            assert_no_redirect, TestServer,
        },
    };
    use axum::http::{HeaderName, HeaderValue, StatusCode};

    const STATE: &str = "facebook_oauth_security_token";

    fn hx_request() -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static("hx-request"),
            HeaderValue::from_static("true"),
        )
    }

    #[tokio::test]
    async fn test_index_renders_page_and_resets() {
        let server = TestServer::configured().unwrap();
        server
            .load(&format!("http://localhost:3000/?code=AQD123&state={STATE}"))
            .await;

        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(response.text().contains(r#"hx-post="/callback""#));
        assert!(server.state().view().is_idle());
    }

    #[tokio::test]
    async fn test_plain_load_stays_idle() {
        let server = TestServer::configured().unwrap();
        let response = server.load("http://localhost:3000/").await;

        response.assert_status_ok();
        assert_no_hx_replace_url(&response);
        assert!(response.text().contains("Connect with Facebook"));
    }

    #[tokio::test]
    async fn test_code_callback_authorizes_and_cleans_address() {
        let server = TestServer::configured().unwrap();
        let response = server
            .load(&format!("http://localhost:3000/?code=AQD123&state={STATE}"))
            .await;

        response.assert_status_ok();
        assert_hx_replace_url(&response, "/");
        assert!(response.text().contains("<code>AQD123</code>"));
        assert_eq!(server.state().view().credential(), Some("AQD123"));
    }

    #[tokio::test]
    async fn test_state_mismatch_shows_error() {
        let server = TestServer::configured().unwrap();
        let response = server
            .load("http://localhost:3000/?code=AQD123&state=forged")
            .await;

        assert_hx_replace_url(&response, "/");
        let body = response.text();
        assert!(body.contains("Possible CSRF attack."));
        assert!(!body.contains("AQD123"));
    }

    #[tokio::test]
    async fn test_provider_error_shows_message() {
        let server = TestServer::configured().unwrap();
        let response = server
            .load("http://localhost:3000/?error=access_denied&error_description=User+denied")
            .await;

        assert_hx_replace_url(&response, "/");
        assert!(response.text().contains("access_denied - User denied"));
        assert!(matches!(server.state().view(), ViewState::Error { .. }));
    }

    #[tokio::test]
    async fn test_token_callback_reads_fragment() {
        let mut config = FbDialogConfig::default();
        config.facebook.client_id = "1234567890".to_string();
        config.facebook.redirect_uri = "http://localhost:3000/".to_string();
        config.facebook.response_mode = ResponseMode::ImplicitToken;
        let server = TestServer::new(config).unwrap();

        let response = server
            .load(&format!(
                "http://localhost:3000/#access_token=EAAB456&state={STATE}"
            ))
            .await;

        assert_hx_replace_url(&response, "/");
        assert_eq!(server.state().view().credential(), Some("EAAB456"));
    }

    #[tokio::test]
    async fn test_token_mode_error_in_fragment_cleans_address() {
        let mut config = FbDialogConfig::default();
        config.facebook.client_id = "1234567890".to_string();
        config.facebook.redirect_uri = "http://localhost:3000/app".to_string();
        config.facebook.response_mode = ResponseMode::ImplicitToken;
        let server = TestServer::new(config).unwrap();

        let response = server
            .load("http://localhost:3000/app#error=access_denied&error_description=Denied")
            .await;

        assert_hx_replace_url(&response, "/app");
        assert!(response.text().contains("access_denied - Denied"));
        assert!(matches!(server.state().view(), ViewState::Error { .. }));
    }

    #[tokio::test]
    async fn test_second_callback_is_ignored() {
        let server = TestServer::configured().unwrap();
        server
            .load(&format!("http://localhost:3000/?code=FIRST&state={STATE}"))
            .await;
        server
            .load(&format!("http://localhost:3000/?code=SECOND&state={STATE}"))
            .await;

        assert_eq!(server.state().view().credential(), Some("FIRST"));
    }

    #[tokio::test]
    async fn test_malformed_location_is_bad_request() {
        let server = TestServer::configured().unwrap();
        let response = server.load("not a url").expect_failure().await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_connect_htmx_redirects_to_dialog() {
        let server = TestServer::configured().unwrap();
        let (name, value) = hx_request();
        let response = server.get("/connect").add_header(name, value).await;

        let expected =
            build_authorization_url(&server.state().config().facebook).unwrap();
        assert_hx_redirect(&response, &expected);
    }

    #[tokio::test]
    async fn test_connect_plain_request_gets_see_other() {
        let server = TestServer::configured().unwrap();
        let response = server.get("/connect").await;

        response.assert_status(StatusCode::SEE_OTHER);
        let location = response.header("Location");
        assert!(location
            .to_str()
            .unwrap()
            .starts_with("https://www.facebook.com/v18.0/dialog/oauth?"));
    }

    #[tokio::test]
    async fn test_connect_without_app_id_never_navigates() {
        let server = TestServer::new(FbDialogConfig::default()).unwrap();
        let (name, value) = hx_request();
        let response = server.get("/connect").add_header(name, value).await;

        response.assert_status_ok();
        assert_no_redirect(&response);
        assert!(response.text().contains("Facebook App ID is not configured."));
        assert!(server.state().view().is_idle());
    }

    #[tokio::test]
    async fn test_copy_then_expire() {
        let server = TestServer::configured().unwrap();
        server
            .load(&format!("http://localhost:3000/?code=AQD123&state={STATE}"))
            .await;

        let response = server.post("/copy").await;
        assert!(response.text().contains("✅ Copied!"));
        assert_eq!(server.clipboard().writes(), vec!["AQD123"]);

        let response = server.post("/copy/expire").await;
        let body = response.text();
        assert!(body.contains("📋 Copy Code"));
        assert!(body.contains("AQD123"));
    }

    #[tokio::test]
    async fn test_copy_while_idle_writes_nothing() {
        let server = TestServer::configured().unwrap();
        server.post("/copy").await.assert_status_ok();
        assert!(server.clipboard().writes().is_empty());
    }

    #[tokio::test]
    async fn test_reset_returns_to_connect() {
        let server = TestServer::configured().unwrap();
        server
            .load(&format!("http://localhost:3000/?code=AQD123&state={STATE}"))
            .await;

        let response = server.post("/reset").await;
        let body = response.text();
        assert!(body.contains("Connect with Facebook"));
        assert!(!body.contains("AQD123"));
        assert!(server.state().view().is_idle());
    }

    #[tokio::test]
    async fn test_health() {
        let server = TestServer::configured().unwrap();
        let response = server.get("/health").await;
        response.assert_status_ok();
        assert!(response.text().contains("healthy"));
    }
}
