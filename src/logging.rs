//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};

/// Pick the log filter with priority: CLI > RUST_LOG > config file > default.
pub fn resolve_filter(
    cli: Option<String>,
    env: Option<String>,
    config: &LoggingConfig,
) -> String {
    cli.or(env)
        .or_else(|| config.filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber.
pub fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}
