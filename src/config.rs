//! Configuration loading and constants.
//!
//! Loads the responder configuration from an optional TOML file, then applies the
//! `PORT` environment override. `AppConfig` is the root configuration struct; every
//! field has a default so an absent or empty file yields a working setup.

use const_format::formatcp;
use serde::Deserialize;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::Path;

// =============================================================================
// Response Bodies and Headers
// =============================================================================

/// Body returned by `GET /`
pub const GREETING: &str = "Hello from CI/CD Pipeline!";

/// Body returned by `GET /health`
pub const HEALTH_OK: &str = "OK";

/// Liveness probes must always reach the process, never a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Listener Defaults
// =============================================================================

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable that overrides `http.port`
pub const PORT_ENV_VAR: &str = "PORT";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path (optional; defaults apply when absent)
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Log target of this crate
const LOG_TARGET: &str = "pipeline_responder";

/// Default log filter when neither the CLI, RUST_LOG nor the config set one
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", LOG_TARGET);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl HttpServerConfig {
    /// Resolve `host` and `port` into a socket address.
    ///
    /// `host` must be a literal IPv4 or IPv6 address; names are not resolved.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event, for log collectors
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// EnvFilter directive, used when neither `--log-level` nor RUST_LOG is set
    pub filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file that must exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load an explicitly requested file, or the default file if it exists,
    /// or fall back to built-in defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Apply the `PORT` environment variable, if set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        let port = std::env::var(PORT_ENV_VAR).ok();
        self.apply_port_override(port.as_deref())
    }

    /// Override `http.port` from a raw string value. Blank values are ignored.
    pub fn apply_port_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(());
        };

        self.http.port = raw.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "{} must be a port number between 0 and 65535, got {:?}",
                PORT_ENV_VAR, raw
            ))
        })?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
