use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::failure::FailureTable;
use crate::narration;

/// Which decision of the scan a [`Step`] records.
///
/// The matched/shift flags and the narration of a step are functions of its
/// kind plus its indices and failure value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// `text[i] == pattern[j]`; both cursors advance.
    Match,
    /// The whole pattern has just matched; the pattern cursor falls back.
    FullMatch,
    /// `text[i] != pattern[j]` with `j > 0`, before the pattern cursor moves.
    Mismatch,
    /// The pattern cursor after falling back from a [`StepKind::Mismatch`].
    Realign,
    /// `text[i] != pattern[0]`; only the text cursor advances.
    MismatchAtStart,
}

impl StepKind {
    /// Whether the step reports a successful character comparison.
    pub fn is_match(self) -> bool {
        matches!(self, StepKind::Match | StepKind::FullMatch)
    }

    /// Whether the step reports the pattern cursor moving backward.
    pub fn is_shift(self) -> bool {
        matches!(self, StepKind::FullMatch | StepKind::Realign)
    }
}

/// One decision point of the scan, frozen at the moment it was emitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub text_index: usize,
    pub pattern_index: usize,
    #[serde(rename = "match")]
    pub matched: bool,
    pub shift: bool,
    /// Human-readable narration; presentation only.
    pub status: String,
    /// Failure-function value consulted at this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_value: Option<usize>,
    /// Character comparisons performed so far.
    pub comparisons: usize,
    /// Copy of the prefix snapshot, one entry per text position.
    pub prefix_function: Vec<usize>,
    /// Text position the viewer should focus on. Encoded as `-1` when `None`.
    #[serde(rename = "highlightPrefixIndex", with = "crate::serde_highlight")]
    pub highlight: Option<usize>,
    pub kind: StepKind,
}

impl Step {
    /// Rebuild the narration of this step from its structured fields.
    ///
    /// `text` and `pattern` must be the inputs of the run that emitted it.
    pub fn describe(&self, text: &[u8], pattern: &[u8]) -> String {
        narration::describe(
            self.kind,
            self.text_index,
            self.pattern_index,
            self.failure_value,
            text,
            pattern,
        )
    }
}

/// Input validation failures. Both are detected before any scanning.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MatchError {
    #[error("Pattern cannot be empty")]
    EmptyPattern,
    #[error("Text cannot be empty")]
    EmptyText,
}

impl MatchError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::EmptyPattern => "EMPTY_PATTERN",
            MatchError::EmptyText => "EMPTY_TEXT",
        }
    }
}

impl From<MatchError> for String {
    fn from(err: MatchError) -> Self {
        err.to_string()
    }
}

impl TryFrom<String> for MatchError {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        [MatchError::EmptyPattern, MatchError::EmptyText]
            .into_iter()
            .find(|err| err.to_string() == value)
            .ok_or_else(|| format!("unknown match error: {value}"))
    }
}

/// Outcome of one search: the failure table, the full trace and the matches.
///
/// When `error` is set every other field is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub failure_function: FailureTable,
    /// Steps in emission order.
    pub steps: Vec<Step>,
    pub found: bool,
    /// Match start positions in discovery order.
    pub positions: Vec<usize>,
    pub comparisons: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<MatchError>,
}

impl MatchResult {
    /// Result carrying only a validation error.
    pub fn from_error(error: MatchError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<MatchError> {
        self.error
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            found: self.found,
            positions: self.positions.clone(),
            comparisons: self.comparisons,
            step_count: self.steps.len(),
        }
    }

    /// Convert into a `Result`, surfacing the validation error if any.
    pub fn into_result(self) -> Result<Self, MatchError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

/// Trace-free view of a [`MatchResult`], used for logging and metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub found: bool,
    pub positions: Vec<usize>,
    pub comparisons: usize,
    pub step_count: usize,
}
