//! Workspace umbrella crate for KMP trace.
//!
//! Re-exports the traceable matcher so callers depend on a single crate, and
//! hosts the rendering used by the `kmp-trace` command-line tool.

pub use matcher::{
    search, search_bytes, set_search_metrics, FailureTable, MatchError, MatchResult,
    MatchSummary, SearchMetrics, Step, StepKind, TraceableMatcher,
};

pub mod report;
