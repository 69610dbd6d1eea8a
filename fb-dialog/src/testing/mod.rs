//! Testing utilities for fb-dialog
//!
//! This module provides test helpers for exercising the page routes:
//! - [`TestServer`] - Wrapper around `axum-test` serving the real router
//! - [`RecordingClipboard`] - Clipboard that remembers what was copied
//! - htmx assertion helpers for common response patterns
//!
//! # Example
//!
//! ```rust,ignore
//! use fb_dialog::testing::{assert_hx_replace_url, TestServer};
//!
//! #[tokio::test]
//! async fn test_callback() {
//!     let server = TestServer::configured().unwrap();
//!
//!     let response = server
//!         .post("/callback")
//!         .form(&[("location", "http://localhost:3000/?code=abc&state=facebook_oauth_security_token")])
//!         .await;
//!
//!     assert_hx_replace_url(&response, "/");
//! }
//! ```

pub mod assertions;
pub mod server;

// Re-export for convenience
pub use assertions::*;
pub use server::{RecordingClipboard, TestServer};
