//! Logging and metrics setup.
//!
//! Tracing goes through `tracing-subscriber` (JSON or pretty, filtered by
//! `RUST_LOG` or the configured level). Search metrics are recorded with the
//! `metrics` facade and rendered by the Prometheus exporter on `/metrics`.

use std::sync::Arc;
use std::time::Duration;

use matcher::{MatchError, MatchSummary, SearchMetrics};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Calling this more than
/// once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    if let Err(err) = installed {
        tracing::debug!(error = %err, "tracing subscriber already installed");
    }
}

/// Process-wide Prometheus handle, installing the recorder on first use.
///
/// Returns `None` if another `metrics` recorder was installed first.
pub fn prometheus_handle() -> Option<PrometheusHandle> {
    static HANDLE: OnceCell<Option<PrometheusHandle>> = OnceCell::new();
    HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "failed to install Prometheus recorder");
                None
            }
        })
        .clone()
}

/// Point the matcher's metrics hook at the `metrics` facade.
pub fn install_search_metrics() {
    static INSTALLED: OnceCell<()> = OnceCell::new();
    INSTALLED.get_or_init(|| {
        matcher::set_search_metrics(Some(Arc::new(PrometheusSearchMetrics)));
    });
}

/// Drain histogram buckets periodically so the exporter's memory stays flat.
pub fn spawn_upkeep(handle: PrometheusHandle, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            handle.run_upkeep();
        }
    })
}

/// [`SearchMetrics`] backed by the `metrics` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusSearchMetrics;

impl SearchMetrics for PrometheusSearchMetrics {
    fn record_search(&self, latency: Duration, summary: &MatchSummary) {
        let outcome = if summary.found { "found" } else { "not_found" };
        metrics::counter!("kmp_searches_total", "outcome" => outcome).increment(1);
        metrics::counter!("kmp_comparisons_total").increment(summary.comparisons as u64);
        metrics::histogram!("kmp_steps").record(summary.step_count as f64);
        metrics::histogram!("kmp_search_duration_seconds").record(latency.as_secs_f64());
    }

    fn record_rejected(&self, error: &MatchError) {
        metrics::counter!("kmp_rejected_total", "reason" => error.code()).increment(1);
    }
}
