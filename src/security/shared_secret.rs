//! Shared-secret header check.

use axum::http::HeaderMap;

/// Header callers present the shared secret in.
pub const WORKER_KEY_HEADER: &str = "x-worker-key";

/// Compare the presented `x-worker-key` header against the configured
/// secret.
///
/// A missing or non-ASCII header compares as the empty string, so it
/// never matches a non-empty configured secret. Comparison is
/// case-sensitive string equality.
pub fn key_matches(headers: &HeaderMap, expected: &str) -> bool {
    let presented = headers
        .get(WORKER_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    presented == expected
}
