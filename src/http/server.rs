//! HTTP server startup logic.
//!
//! Binding is split from serving so a bind failure surfaces before the process
//! ever reports itself as running.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host {host:?}: {source}")]
    InvalidAddress {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Bind the listening socket. Fails immediately if the address is taken or
/// not permitted; there is no retry.
pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config
        .http
        .socket_addr()
        .map_err(|source| ServerError::InvalidAddress {
            host: config.http.host.clone(),
            source,
        })?;

    let listener = bind_listener(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "App running on port {}", local.port());

    serve(listener, app, shutdown::shutdown_signal()).await
}
