//! HTMX-specific assertion helpers for testing
//!
//! This module provides helper functions for asserting htmx response headers
//! in route tests.

use axum_test::TestResponse;

fn header<'a>(response: &'a TestResponse, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .map(|value| value.to_str().expect("header value is not valid UTF-8"))
}

/// Assert that the response contains an HX-Redirect header with the expected URL
///
/// # Panics
///
/// Panics if the header is missing or has a different value
pub fn assert_hx_redirect(response: &TestResponse, expected_url: &str) {
    let actual = header(response, "HX-Redirect").expect("HX-Redirect header not found");
    assert_eq!(
        actual, expected_url,
        "Expected HX-Redirect to {expected_url}, got {actual}"
    );
}

/// Assert that the response does not navigate the browser
///
/// # Panics
///
/// Panics if an HX-Redirect or Location header is present
pub fn assert_no_redirect(response: &TestResponse) {
    assert!(
        header(response, "HX-Redirect").is_none(),
        "Unexpected HX-Redirect header"
    );
    assert!(
        header(response, "Location").is_none(),
        "Unexpected Location header"
    );
}

/// Assert that the response contains an HX-Replace-Url header with the expected path
///
/// # Panics
///
/// Panics if the header is missing or has a different value
pub fn assert_hx_replace_url(response: &TestResponse, expected_path: &str) {
    let actual = header(response, "HX-Replace-Url").expect("HX-Replace-Url header not found");
    assert_eq!(
        actual, expected_path,
        "Expected HX-Replace-Url to be {expected_path}, got {actual}"
    );
}

/// Assert that the response leaves the address bar alone
///
/// # Panics
///
/// Panics if an HX-Replace-Url header is present
pub fn assert_no_hx_replace_url(response: &TestResponse) {
    assert!(
        header(response, "HX-Replace-Url").is_none(),
        "Unexpected HX-Replace-Url header"
    );
}
