//! HTTP route table.
//!
//! Two fixed GET routes plus a not-found fallback. Each route's method router
//! carries the same fallback as the outer router, so a wrong method on a known
//! path is answered exactly like an unknown path.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod fallback;
pub mod health;
pub mod root;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;

/// Creates the Axum router with both routes and the fallback.
pub fn create_router() -> Router {
    let root_routes = Router::new().route("/", get(root::index).fallback(fallback::not_found));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(
            "/health",
            get(health::health).fallback(fallback::not_found),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(root_routes)
        .merge(health_routes)
        .fallback(fallback::not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
