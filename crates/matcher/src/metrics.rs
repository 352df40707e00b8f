// Metrics hooks for the `matcher` crate.
//
// Callers install a global `SearchMetrics` implementation via
// [`set_search_metrics`]; [`crate::TraceableMatcher::run`] then reports latency and trace
// size for every completed run and the reason for every rejected one. The
// crate itself stays independent of any metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::{MatchError, MatchSummary};

/// Metrics observer for search operations.
pub trait SearchMetrics: Send + Sync {
    /// Record a completed search.
    ///
    /// `latency` covers failure-table construction and the traced scan.
    fn record_search(&self, latency: Duration, summary: &MatchSummary);

    /// Record a search rejected by input validation.
    fn record_rejected(&self, error: &MatchError);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global search metrics recorder.
///
/// Typically called once during service startup.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
