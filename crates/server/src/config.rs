use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ServerError;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output for local development.
    Pretty,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Longest text accepted by `/kmp`, in code units.
    ///
    /// Every step carries a full snapshot, so trace size grows with the
    /// square of the text length.
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,

    /// Longest pattern accepted by `/kmp`, in code units.
    #[serde(default = "default_max_pattern_len")]
    pub max_pattern_len: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            max_text_len: default_max_text_len(),
            max_pattern_len: default_max_pattern_len(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            metrics_enabled: default_true(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `server.{toml,yaml,json}` file,
    /// then `KMP_SERVER_*` environment variables (e.g. `KMP_SERVER_PORT`).
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("KMP_SERVER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.port == 0 {
            return Err(ServerError::Config("port must be non-zero".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ServerError::Config(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        if self.max_body_size_mb == 0 {
            return Err(ServerError::Config(
                "max_body_size_mb must be greater than zero".into(),
            ));
        }
        if self.max_text_len == 0 || self.max_pattern_len == 0 {
            return Err(ServerError::Config(
                "max_text_len and max_pattern_len must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    1
}

fn default_max_text_len() -> usize {
    1_000
}

fn default_max_pattern_len() -> usize {
    200
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size_mb, 1);
        assert_eq!(cfg.max_text_len, 1_000);
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert!(cfg.enable_cors);
        assert!(cfg.metrics_enabled);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_invalid_bind_addr() {
        let cfg = ServerConfig {
            bind_addr: "not an address".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.socket_addr(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let cfg = ServerConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("zero timeout must be rejected");
        assert!(err.to_string().contains("timeout_secs"));

        let cfg = ServerConfig {
            max_text_len: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"port": 9090, "log_format": "pretty"}"#).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert_eq!(cfg.bind_addr, "0.0.0.0");
        assert_eq!(cfg.max_pattern_len, 200);
    }
}
