//! Default response for anything outside the route table.
//!
//! Unknown paths and known paths requested with an unsupported method both end
//! up here, so `POST /health` is a 404 rather than a 405.

use axum::http::{Method, StatusCode, Uri};

/// Not-found handler.
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, String) {
    tracing::debug!(%method, path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
}
