//! Error types for rule registration and scanning.
//!
//! Two kinds, raised at different times:
//! - [`RuleError`]: configuration mistakes, surfaced synchronously while a
//!   rule is being registered — never mid-scan.
//! - [`LexError`]: no rule matched at the cursor. The only scan-time
//!   failure; carries everything a renderer needs to point at the exact
//!   offending position.
//!
//! The core itself never prints, logs, or retries. Both types implement
//! `std::error::Error` and propagate to the caller unchanged.

use thiserror::Error;

/// A rule failed to register.
#[derive(Clone, Debug, Error)]
pub enum RuleError {
    /// The pattern is not valid regex syntax.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern text as supplied by the caller (unanchored).
        pattern: String,
        /// The underlying regex compilation error.
        source: regex::Error,
    },

    /// The pattern can match the empty string (e.g. `a*`). Such a rule
    /// could never produce a lexeme and would stall the scan cursor, so it
    /// is rejected up front.
    #[error("pattern `{pattern}` matches the empty string")]
    EmptyMatch {
        /// The pattern text as supplied by the caller.
        pattern: String,
    },
}

/// No rule matched at the current scan position.
///
/// Carries the full diagnostic-sink contract: WHERE (1-based `line` and
/// `column`, plus the byte `offset`), the complete text of the failing
/// source line, and the offending remaining fragment — the rest of that
/// line, always at least one character. Rendering (caret messages, color)
/// lives outside the core.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("unmatched input `{fragment}` at line {line}, column {column}")]
pub struct LexError {
    /// 1-based line of the first unmatched character.
    pub line: u32,
    /// 1-based column of the first unmatched character.
    pub column: u32,
    /// Byte offset of the first unmatched character in the source.
    pub offset: usize,
    /// Full text of the source line containing the failure (no trailing
    /// newline).
    pub line_text: String,
    /// The unmatched remainder of the failing line. For a failure on the
    /// newline itself this is `"\n"`.
    pub fragment: String,
}
