//! # KMP Trace Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` runs Knuth-Morris-Pratt substring search and records every
//! decision it makes, so a viewer can replay the algorithm one frame at a
//! time. Besides the match positions it returns the pattern's failure
//! function, one [`Step`] per comparison, shift or full match, and the total
//! comparison count.
//!
//! Matching works on code units: `&str` inputs are compared byte by byte, with
//! no Unicode awareness.
//!
//! ## Core Types
//!
//! - [`FailureTable`]: the KMP failure (prefix) function of a pattern.
//! - [`TraceableMatcher`]: validates inputs and runs the traced scan.
//! - [`Step`]: a frozen snapshot of one decision point, with its own copy of
//!   the per-text-position prefix snapshot.
//!   - [`StepKind`] names the decision; the `match`/`shift` flags and the
//!     narration follow from it.
//! - [`MatchResult`]: failure table, steps, positions, comparisons, and an
//!   optional [`MatchError`].
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{search, MatchError, StepKind};
//!
//! let result = matcher::search("ABABDABACDABABCABAB", "ABABCABAB");
//! assert_eq!(result.failure_function.as_slice(), &[0, 0, 1, 2, 0, 1, 2, 3, 4]);
//! assert_eq!(result.positions, vec![10]);
//! assert!(result
//!     .steps
//!     .iter()
//!     .any(|step| step.kind == StepKind::FullMatch));
//!
//! // Validation errors travel inside the result.
//! let rejected = search("", "a");
//! assert_eq!(rejected.error, Some(MatchError::EmptyText));
//! assert!(rejected.steps.is_empty());
//! ```
//!
//! ## Wire Format
//!
//! Every type serialises with camelCase field names. A step's highlighted
//! index is written as `highlightPrefixIndex`, with `-1` for none; the error
//! is written as its message string.
//!
//! ## Observability
//!
//! Install a [`SearchMetrics`] implementation via [`set_search_metrics`] to
//! record per-search latency and trace size. Every [`TraceableMatcher::run`]
//! reports, including runs made through [`search`] and [`search_bytes`]. Each finished scan is also
//! logged at `debug` level through `tracing`.

pub mod engine;
pub mod failure;
pub mod metrics;
mod narration;
mod serde_highlight;
pub mod types;

pub use crate::engine::{search, search_bytes, TraceableMatcher};
pub use crate::failure::FailureTable;
pub use crate::metrics::{set_search_metrics, SearchMetrics};
pub use crate::types::{MatchError, MatchResult, MatchSummary, Step, StepKind};
