//! KMP failure (prefix) function.
//!
//! For every pattern position `i`, the table holds the length of the longest
//! proper prefix of the pattern that is also a suffix of `pattern[..=i]`.
//! The scan consults it after a mismatch or a full match to decide how far
//! the pattern cursor falls back without re-reading text.

use serde::{Deserialize, Serialize};

/// Failure table for a single pattern.
///
/// Serialises transparently as a JSON array of integers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FailureTable(Vec<usize>);

impl FailureTable {
    /// Build the table for `pattern` in amortised linear time.
    ///
    /// An empty pattern yields an empty table; callers that need a
    /// non-empty pattern validate before building.
    pub fn build(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut failure = vec![0usize; m];
        let mut j = 0usize;

        for i in 1..m {
            if pattern[i] == pattern[j] {
                j += 1;
                failure[i] = j;
            } else {
                while j > 0 && pattern[i] != pattern[j] {
                    j = failure[j - 1];
                }
                if pattern[i] == pattern[j] {
                    j += 1;
                }
                failure[i] = j;
            }
        }

        Self(failure)
    }

    /// Value at pattern position `i`, if in range.
    pub fn get(&self, i: usize) -> Option<usize> {
        self.0.get(i).copied()
    }

    /// Where the pattern cursor resumes after `matched` characters matched.
    ///
    /// `matched` must be in `1..=len()`.
    pub fn fallback(&self, matched: usize) -> usize {
        self.0[matched - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl AsRef<[usize]> for FailureTable {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}
