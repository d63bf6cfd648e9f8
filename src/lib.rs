//! pipeline-responder: a liveness-checkable HTTP responder.
//!
//! Serves a greeting on `GET /` and a liveness probe on `GET /health`; every
//! other request gets a 404. Intended to be started and probed by a CI/CD
//! deployment pipeline or container orchestrator.

pub mod config;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use config::{AppConfig, ConfigError};
pub use crate::http::{bind_listener, serve, start_server, ServerError};
pub use routes::create_router;
