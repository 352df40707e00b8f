//! Narration strings attached to each trace step.
//!
//! Every sentence is rebuilt from the step's kind, cursors and failure value
//! plus the two inputs, so nothing downstream needs to parse them.

use crate::types::StepKind;

/// Render a code unit the way the viewer shows it.
fn unit(bytes: &[u8], index: usize) -> char {
    bytes.get(index).copied().map(char::from).unwrap_or('?')
}

pub(crate) fn describe(
    kind: StepKind,
    text_index: usize,
    pattern_index: usize,
    failure_value: Option<usize>,
    text: &[u8],
    pattern: &[u8],
) -> String {
    let i = text_index;
    let j = pattern_index;
    let f = failure_value.unwrap_or(0);
    match kind {
        StepKind::Match => format!(
            "Comparing text[{i}]='{}' with pattern[{j}]='{}': match found. Advancing to text[{}] and pattern[{}].",
            unit(text, i),
            unit(pattern, j),
            i.saturating_add(1),
            j.saturating_add(1),
        ),
        StepKind::FullMatch => format!(
            "Full pattern match found at text index {}! Using failure function value {f} to shift pattern to pattern[{f}].",
            i.saturating_sub(j),
        ),
        StepKind::Mismatch => format!(
            "Mismatch at text[{i}]='{}' and pattern[{j}]='{}'. Using failure function value {f} to shift pattern to pattern[{f}].",
            unit(text, i),
            unit(pattern, j),
        ),
        StepKind::Realign => format!(
            "Pattern shifted to align at pattern[{j}] with text[{i}]='{}' based on failure function.",
            unit(text, i),
        ),
        StepKind::MismatchAtStart => format!(
            "Mismatch at text[{i}]='{}' and pattern[0]='{}'. No prefix to use, advancing to text[{}].",
            unit(text, i),
            unit(pattern, 0),
            i.saturating_add(1),
        ),
    }
}
