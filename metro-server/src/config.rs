//! Server configuration.
//!
//! Read from environment variables at startup; every setting has a default
//! so the server runs out of the box against the bundled description.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Description file path.
pub const NETWORKS_VAR: &str = "METRO_NETWORKS";
/// Listen address.
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";
/// Reload interval in seconds; 0 disables reload.
pub const RELOAD_SECS_VAR: &str = "METRO_RELOAD_SECS";
/// Per-request deadline in milliseconds.
pub const QUERY_TIMEOUT_MS_VAR: &str = "METRO_QUERY_TIMEOUT_MS";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: &'static str,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path to the network description file.
    pub networks_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// How often to rebuild the catalog from disk. `None` disables reload.
    pub reload_interval: Option<Duration>,

    /// Deadline applied to every request.
    pub query_timeout: Duration,
}

impl ServerConfig {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(NETWORKS_VAR) {
            config.networks_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError {
                var: BIND_ADDR_VAR,
                value: value.clone(),
                reason: "expected host:port",
            })?;
        }

        if let Some(value) = lookup(RELOAD_SECS_VAR) {
            let secs: u64 = parse_number(RELOAD_SECS_VAR, &value)?;
            config.reload_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(value) = lookup(QUERY_TIMEOUT_MS_VAR) {
            let ms: u64 = parse_number(QUERY_TIMEOUT_MS_VAR, &value)?;
            if ms == 0 {
                return Err(ConfigError {
                    var: QUERY_TIMEOUT_MS_VAR,
                    value,
                    reason: "must be greater than zero",
                });
            }
            config.query_timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn parse_number(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        value: value.to_string(),
        reason: "expected a non-negative integer",
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            networks_path: PathBuf::from("data/networks.json"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            reload_interval: Some(Duration::from_secs(300)), // 5 minutes
            query_timeout: Duration::from_secs(2),
        }
    }
}
