//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is an HTML page
pub fn assert_html(response: &TestResponse) {
    assert_ok(response);
    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("text/html"),
        "Expected text/html, got {content_type}"
    );
}

/// Assert response is a 303 redirect and return its location
pub fn assert_see_other(response: &TestResponse) -> String {
    assert_status(response, StatusCode::SEE_OTHER);
    response.location().expect("Redirect without Location header")
}

/// Assert JSON error response carries the expected status field
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Full response: {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Grid dimensions as (columns, rows) from a /api/grid response
pub fn grid_shape(json: &serde_json::Value) -> (usize, usize) {
    let columns = json["header"].as_array().map_or(0, Vec::len);
    let rows = json["rows"].as_array().map_or(0, Vec::len);
    (columns, rows)
}
