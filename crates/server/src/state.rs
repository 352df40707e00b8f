use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// When this state was created; used for uptime reporting
    pub started_at: Instant,

    /// Prometheus render handle, present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state
    ///
    /// With metrics enabled this installs the process-wide Prometheus
    /// recorder (first call only) and the matcher's search metrics hook.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        config.validate()?;

        let metrics = if config.metrics_enabled {
            let handle = telemetry::prometheus_handle();
            if handle.is_some() {
                telemetry::install_search_metrics();
            }
            handle
        } else {
            None
        };

        Ok(Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            metrics,
        })
    }

    /// Seconds since the state was created
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Check text and pattern against the configured length limits, in bytes.
    pub fn check_input_limits(&self, text: &str, pattern: &str) -> ServerResult<()> {
        if text.len() > self.config.max_text_len {
            return Err(ServerError::InputTooLarge {
                field: "text",
                max: self.config.max_text_len,
            });
        }
        if pattern.len() > self.config.max_pattern_len {
            return Err(ServerError::InputTooLarge {
                field: "pattern",
                max: self.config.max_pattern_len,
            });
        }
        Ok(())
    }
}

/// Server metadata for info endpoints
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub name: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub max_text_len: usize,
    pub max_pattern_len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_without_metrics() -> ServerState {
        let config = ServerConfig {
            metrics_enabled: false,
            max_text_len: 5,
            max_pattern_len: 2,
            ..Default::default()
        };
        ServerState::new(config).expect("valid config")
    }

    #[test]
    fn limits_are_enforced_per_field() {
        let state = state_without_metrics();
        assert!(state.check_input_limits("abcde", "ab").is_ok());
        assert!(matches!(
            state.check_input_limits("abcdef", "a"),
            Err(ServerError::InputTooLarge { field: "text", .. })
        ));
        assert!(matches!(
            state.check_input_limits("a", "abc"),
            Err(ServerError::InputTooLarge { field: "pattern", .. })
        ));
    }

    #[test]
    fn metrics_handle_absent_when_disabled() {
        assert!(state_without_metrics().metrics.is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(ServerState::new(config).is_err());
    }
}
