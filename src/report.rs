//! Text renderings of a [`MatchResult`] for terminals and pipes.

use std::fmt::Write as _;

use clap::ValueEnum;

use crate::MatchResult;

/// How the CLI prints a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, the same shape the HTTP API returns.
    #[default]
    Json,
    /// Indented JSON.
    Pretty,
    /// One summary line followed by the narration of every step.
    Summary,
}

/// Render `result` in the requested format.
pub fn render(result: &MatchResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(result),
        OutputFormat::Pretty => serde_json::to_string_pretty(result),
        OutputFormat::Summary => Ok(summary(result)),
    }
}

fn summary(result: &MatchResult) -> String {
    let mut out = String::new();
    if let Some(err) = result.error {
        let _ = writeln!(out, "error: {err}");
        return out;
    }

    let positions = result
        .positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(
        out,
        "found={} positions=[{}] comparisons={} steps={}",
        result.found,
        positions,
        result.comparisons,
        result.steps.len()
    );
    let _ = writeln!(out, "failure function: {:?}", result.failure_function.as_slice());
    for (n, step) in result.steps.iter().enumerate() {
        let _ = writeln!(out, "{:>4}  {}", n + 1, step.status);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search, MatchError};

    #[test]
    fn summary_lists_every_step() {
        let result = search("abc", "xyz");
        let text = render(&result, OutputFormat::Summary).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "found=false positions=[] comparisons=3 steps=3");
        assert_eq!(lines[1], "failure function: [0, 0, 0]");
        assert_eq!(lines.len(), 5);
        assert!(lines[2].ends_with("advancing to text[1]."));
    }

    #[test]
    fn summary_of_error_is_single_line() {
        let result = search("abc", "");
        assert_eq!(result.error, Some(MatchError::EmptyPattern));
        let text = render(&result, OutputFormat::Summary).unwrap();
        assert_eq!(text, "error: Pattern cannot be empty\n");
    }

    #[test]
    fn json_formats_parse_back() {
        let result = search("aaaa", "aa");
        for format in [OutputFormat::Json, OutputFormat::Pretty] {
            let text = render(&result, format).unwrap();
            let back: MatchResult = serde_json::from_str(&text).unwrap();
            assert_eq!(back, result);
        }
    }
}
