//! pipeline-responder entry point.
//!
//! Parses the command line, loads configuration, initializes tracing, builds the
//! router and serves it until SIGINT/SIGTERM. Any startup failure ends the
//! process with a non-zero exit code.

use clap::Parser;

use pipeline_responder::config::AppConfig;
use pipeline_responder::logging::{init_tracing, resolve_filter};
use pipeline_responder::{create_router, start_server};

/// A liveness-checkable HTTP responder for CI/CD pipeline deployments
#[derive(Parser, Debug)]
#[command(name = "pipeline-responder", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind (overrides http.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides http.port and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "pipeline_responder=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration priority: CLI > env > file > default
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_env()?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    let log_filter = resolve_filter(
        args.log_level,
        std::env::var("RUST_LOG").ok(),
        &config.logging,
    );
    init_tracing(&log_filter, config.logging.format);

    tracing::debug!(
        host = %config.http.host,
        port = config.http.port,
        format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
