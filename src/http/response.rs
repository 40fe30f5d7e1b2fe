//! Response construction.
//!
//! # Responsibilities
//! - Fixed CORS headers for pre-flight and error responses
//! - JSON error bodies with matching HTTP status
//! - Pass-through responses copying upstream status/body/content-type
//!
//! # Design Decisions
//! - Upstream bodies are relayed verbatim; the gateway never rewrites
//!   upstream application-level errors
//! - Missing upstream content-type defaults to text/plain

use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST,OPTIONS";
pub const ALLOW_HEADERS: &str = "content-type";

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Empty 204 answering a CORS pre-flight.
pub fn preflight() -> Response<Body> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN)
        .header(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS)
        .header(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS)
        .body(Body::empty())
        .unwrap()
}

/// JSON error response `{"error": message}` with the fixed CORS headers.
pub fn json_error(status: StatusCode, message: &str) -> Response<Body> {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN)
        .header(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS)
        .header(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS)
        .body(Body::from(body))
        .unwrap()
}

/// Relay an upstream response: its status and body verbatim, its
/// content-type when present, plus the CORS origin header.
pub fn pass_through(
    status: StatusCode,
    content_type: Option<HeaderValue>,
    body: impl Into<Body>,
) -> Response<Body> {
    let content_type =
        content_type.unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN)
        .body(body.into())
        .unwrap()
}
