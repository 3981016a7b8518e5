// traits.rs - Core traits and types for the diagnoser system

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Default truncation length for parser error detail embedded in a diagnosis
pub const DEFAULT_MAX_DETAIL_LEN: usize = 100;

/// Outcome of a single parse attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The file parsed successfully
    Valid,
    /// The parser rejected the file
    Invalid,
}

/// Diagnosis for one input file - exactly one is produced per invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Name of the format that was tried (e.g. "JSON")
    pub format: String,
    pub verdict: Verdict,
    /// The human-readable diagnosis string
    pub summary: String,
    /// Truncated raw parser message (invalid diagnoses only)
    pub detail: Option<String>,
    /// Source line reported by the parser, if it exposes one (1-based)
    pub line: Option<usize>,
    /// Source column reported by the parser, if it exposes one (1-based)
    pub column: Option<usize>,
}

impl Diagnosis {
    /// Create a success diagnosis with the format's fixed affirmative string
    pub fn valid(format: &str, summary: impl Into<String>) -> Self {
        Self {
            format: format.to_string(),
            verdict: Verdict::Valid,
            summary: summary.into(),
            detail: None,
            line: None,
            column: None,
        }
    }

    /// Create a failure diagnosis carrying the truncated parser message
    pub fn invalid(format: &str, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            format: format.to_string(),
            verdict: Verdict::Invalid,
            summary: summary.into(),
            detail: Some(detail.into()),
            line: None,
            column: None,
        }
    }

    /// Attach the source position reported by the parser
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.verdict, Verdict::Valid)
    }
}

/// Truncate a parser message to at most `max_len` characters.
/// Operates on characters, not bytes, so multi-byte input never splits.
pub fn truncate_detail(message: &str, max_len: usize) -> String {
    if message.chars().count() <= max_len {
        message.to_string()
    } else {
        message.chars().take(max_len).collect()
    }
}

/// Trait for format diagnosis strategies
/// This allows pluggable mechanisms for how config formats are checked
pub trait FormatDiagnoser: Send + Sync + Debug {
    /// Attempt to parse `content` and render the diagnosis.
    /// Parser error detail is truncated to `max_detail_len` characters.
    fn diagnose(&self, content: &str, max_detail_len: usize) -> Diagnosis;

    /// Get a human-readable name for this format
    fn name(&self) -> &'static str;

    /// Get a description of this format
    fn description(&self) -> &'static str;

    /// File extensions recognized for this format (lowercase, without dot)
    fn extensions(&self) -> &'static [&'static str];
}
