//! HTTP server lifecycle.
//!
//! The server includes:
//! - Fail-fast listener binding (no retries; the supervisor owns restart policy)
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{bind_listener, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
