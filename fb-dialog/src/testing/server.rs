//! Test server utilities using axum-test
//!
//! Provides a thin wrapper around `axum-test::TestServer` that serves the
//! application router with an in-memory clipboard.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::{
    clipboard::{Clipboard, ClipboardError},
    config::FbDialogConfig,
    server::router,
    state::FbDialogState,
};

/// Clipboard that records every write
///
/// Clones share the same record, so a test keeps one clone and hands the
/// other to the server.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    /// Everything written so far, oldest first
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// Test server wrapper for route testing
///
/// # Example
///
/// ```rust,ignore
/// use fb_dialog::testing::TestServer;
///
/// #[tokio::test]
/// async fn test_homepage() {
///     let server = TestServer::configured().unwrap();
///     server.get("/").await.assert_status_ok();
/// }
/// ```
pub struct TestServer {
    inner: axum_test::TestServer,
    state: FbDialogState,
    clipboard: RecordingClipboard,
}

impl TestServer {
    /// Serve the router for `config` with a recording clipboard
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be started
    pub fn new(config: FbDialogConfig) -> anyhow::Result<Self> {
        let clipboard = RecordingClipboard::default();
        let state = FbDialogState::with_clipboard(config, clipboard.clone());
        let inner = axum_test::TestServer::new(router(state.clone()))?;
        Ok(Self {
            inner,
            state,
            clipboard,
        })
    }

    /// Serve with an app ID and redirect URI filled in
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be started
    pub fn configured() -> anyhow::Result<Self> {
        let mut config = FbDialogConfig::default();
        config.facebook.client_id = "1234567890".to_string();
        config.facebook.redirect_uri = "http://localhost:3000/".to_string();
        Self::new(config)
    }

    /// Make a GET request to the server
    pub fn get(&self, path: &str) -> axum_test::TestRequest {
        self.inner.get(path)
    }

    /// Make a POST request to the server
    pub fn post(&self, path: &str) -> axum_test::TestRequest {
        self.inner.post(path)
    }

    /// Post `location` to `/callback` the way the page does on load
    pub fn load(&self, location: &str) -> axum_test::TestRequest {
        self.inner
            .post("/callback")
            .form(&[("location", location)])
    }

    /// Shared state behind the router
    #[must_use]
    pub const fn state(&self) -> &FbDialogState {
        &self.state
    }

    /// Clipboard the copy button writes to
    #[must_use]
    pub const fn clipboard(&self) -> &RecordingClipboard {
        &self.clipboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_creation() {
        let server = TestServer::configured().unwrap();
        server.get("/health").await.assert_status_ok();
    }

    #[test]
    fn test_recording_clipboard_shares_writes() {
        let clipboard = RecordingClipboard::default();
        let mut handle = clipboard.clone();
        handle.set_text("first").unwrap();
        handle.set_text("second").unwrap();
        assert_eq!(clipboard.writes(), vec!["first", "second"]);
    }
}
