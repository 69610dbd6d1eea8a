//! Error types and error handling

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Crate error type
///
/// Flow problems the user should see (missing configuration, provider
/// denial, state mismatch) are rendered into the page as part of the view
/// and never reach this type from a handler. What does reach it is a genuine
/// fault: a template that failed to render, a malformed request, a clipboard
/// task that panicked.
#[derive(Debug, Error)]
pub enum FbDialogError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad request error
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Blocking task failed to complete
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for FbDialogError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl FbDialogError {
    /// HTTP status this error maps to
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FbDialogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            (status, "Something went wrong. Check the server log.").into_response()
        } else {
            tracing::debug!(error = %self, "Rejected request");
            (status, self.to_string()).into_response()
        }
    }
}
