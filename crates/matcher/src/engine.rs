use std::time::Instant;

use crate::failure::FailureTable;
use crate::metrics::metrics_recorder;
use crate::narration;
use crate::types::{MatchError, MatchResult, Step, StepKind};


/// KMP matcher that records every decision it makes.
///
/// Holds borrowed inputs only; all scan state lives inside a single
/// [`TraceableMatcher::run`] call, so a matcher can be run repeatedly and
/// from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct TraceableMatcher<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
}

impl<'a> TraceableMatcher<'a> {
    pub fn new(text: &'a [u8], pattern: &'a [u8]) -> Self {
        Self { text, pattern }
    }

    /// Matcher over the UTF-8 code units of two strings.
    pub fn for_str(text: &'a str, pattern: &'a str) -> Self {
        Self::new(text.as_bytes(), pattern.as_bytes())
    }

    /// Check the inputs. The pattern is checked first.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.pattern.is_empty() {
            return Err(MatchError::EmptyPattern);
        }
        if self.text.is_empty() {
            return Err(MatchError::EmptyText);
        }
        Ok(())
    }

    /// Build the failure table and run the traced scan.
    ///
    /// Reports to the installed [`crate::SearchMetrics`] hook, if any.
    pub fn run(&self) -> Result<MatchResult, MatchError> {
        let started = Instant::now();
        let recorder = metrics_recorder();

        if let Err(err) = self.validate() {
            tracing::debug!(error = %err, code = err.code(), "kmp search rejected");
            if let Some(recorder) = recorder {
                recorder.record_rejected(&err);
            }
            return Err(err);
        }

        let failure = FailureTable::build(self.pattern);
        let mut scan = Scan::new(self.text, self.pattern, &failure);
        scan.run();

        let Scan {
            steps,
            positions,
            comparisons,
            ..
        } = scan;

        tracing::debug!(
            text_len = self.text.len(),
            pattern_len = self.pattern.len(),
            matches = positions.len(),
            comparisons,
            steps = steps.len(),
            "kmp scan finished"
        );

        let result = MatchResult {
            failure_function: failure,
            steps,
            found: !positions.is_empty(),
            positions,
            comparisons,
            error: None,
        };

        if let Some(recorder) = recorder {
            recorder.record_search(started.elapsed(), &result.summary());
        }

        Ok(result)
    }
}

/// Mutable state of one scan.
struct Scan<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
    failure: &'a FailureTable,
    /// Best known prefix-match length per text position. Copied into every step.
    snapshot: Vec<usize>,
    steps: Vec<Step>,
    positions: Vec<usize>,
    comparisons: usize,
}

impl<'a> Scan<'a> {
    fn new(text: &'a [u8], pattern: &'a [u8], failure: &'a FailureTable) -> Self {
        Self {
            text,
            pattern,
            failure,
            snapshot: vec![0; text.len()],
            // Each text position yields at least one step.
            steps: Vec::with_capacity(text.len()),
            positions: Vec::new(),
            comparisons: 0,
        }
    }

    fn run(&mut self) {
        let n = self.text.len();
        let m = self.pattern.len();
        let mut i = 0usize;
        let mut j = 0usize;

        while i < n {
            self.comparisons += 1;

            if self.text[i] == self.pattern[j] {
                let len = j + 1;
                if len > self.snapshot[i] {
                    self.snapshot[i] = len;
                }
                self.emit(StepKind::Match, i, j, None, Some(i));
                i += 1;
                j += 1;

                if j == m {
                    let start = i - m;
                    self.positions.push(start);
                    // The whole span is now known to match: relabel it 1..=m.
                    for (offset, slot) in self.snapshot[start..i].iter_mut().enumerate() {
                        *slot = offset + 1;
                    }
                    let next = self.failure.fallback(j);
                    self.emit(StepKind::FullMatch, i - 1, j - 1, Some(next), None);
                    j = next;
                }
            } else if j > 0 {
                let next = self.failure.fallback(j);
                self.emit(StepKind::Mismatch, i, j, Some(next), Some(i));
                j = next;
                self.emit(StepKind::Realign, i, j, None, Some(i));
            } else {
                self.emit(StepKind::MismatchAtStart, i, 0, None, Some(i));
                i += 1;
            }
        }
    }

    fn emit(
        &mut self,
        kind: StepKind,
        text_index: usize,
        pattern_index: usize,
        failure_value: Option<usize>,
        highlight: Option<usize>,
    ) {
        let status = narration::describe(
            kind,
            text_index,
            pattern_index,
            failure_value,
            self.text,
            self.pattern,
        );
        self.steps.push(Step {
            text_index,
            pattern_index,
            matched: kind.is_match(),
            shift: kind.is_shift(),
            status,
            failure_value,
            comparisons: self.comparisons,
            prefix_function: self.snapshot.clone(),
            highlight,
            kind,
        });
    }
}

/// Search `pattern` in `text`, comparing UTF-8 code units.
///
/// Validation errors are returned inside the result, never as a panic or
/// `Err`; see [`TraceableMatcher::run`] for the `Result` form.
///
/// ```
/// let result = matcher::search("aaaa", "aa");
/// assert_eq!(result.positions, vec![0, 1, 2]);
/// assert_eq!(result.comparisons, result.steps.last().map_or(0, |s| s.comparisons));
/// ```
pub fn search(text: &str, pattern: &str) -> MatchResult {
    search_bytes(text.as_bytes(), pattern.as_bytes())
}

/// Byte-slice form of [`search`].
pub fn search_bytes(text: &[u8], pattern: &[u8]) -> MatchResult {
    TraceableMatcher::new(text, pattern)
        .run()
        .unwrap_or_else(MatchResult::from_error)
}
