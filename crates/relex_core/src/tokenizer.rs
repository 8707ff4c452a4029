//! The tokenizer engine: anchored longest-match scanning over a rule set.
//!
//! [`Tokenizer::next_token`] is the sole scanning primitive. Each call
//! attempts every rule anchored at the cursor, picks the longest match
//! (ties go to the rule registered first), advances the cursor past the
//! winning lexeme, and returns a [`Scan`]: a token, the end-of-input
//! signal, or a lexical error. Discard rules are resolved internally — a
//! call never surfaces them, it keeps scanning from the new position.
//!
//! Eager whole-input scanning ([`Tokenizer::tokenize`], [`tokenize`]) and
//! lazy iteration ([`Tokenizer::stream`]) are both thin layers over
//! `next_token`.
//!
//! # State Machine
//!
//! ```text
//! Active ──(end of input)──► Finished   (EndOfInput, repeatable)
//!    │
//!    └──(no rule matches)──► Failed     (same LexError, repeatable)
//! ```
//!
//! The cursor is owned exclusively by the engine and freezes once the scan
//! leaves `Active`. There is no resynchronization: recovery is the
//! caller's decision, outside the core.

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::rule_set::{Rule, RuleSet};
use crate::stream::TokenStream;
use crate::token::{Category, Token};

/// Outcome of one `next_token` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scan<'src, C> {
    /// A rule matched and emitted.
    Token(Token<'src, C>),
    /// The cursor is at (or past) the end of input. Terminal: repeated
    /// calls keep returning it.
    EndOfInput,
    /// No rule matched at the cursor. Terminal: the scan is frozen at the
    /// failing position and repeated calls return the same error.
    Error(LexError),
}

/// Where the scan currently stands.
#[derive(Clone, Debug)]
enum ScanState {
    /// Scanning; the cursor may still advance.
    Active,
    /// Input exhausted normally.
    Finished,
    /// A position matched no rule; the error is replayed on every call.
    Failed(LexError),
}

/// Scanning engine over one rule set and one source text.
///
/// Holds the single scan cursor — only one stream of tokens can exist per
/// scan, which the `&mut` requirement on [`next_token`](Self::next_token)
/// and [`stream`](Self::stream) enforces statically. The rule table is
/// borrowed shared, so one table can feed many engines.
#[derive(Clone, Debug)]
pub struct Tokenizer<'r, 'src, C> {
    rules: &'r RuleSet<C>,
    source: &'src str,
    cursor: Cursor,
    state: ScanState,
}

impl<'r, 'src, C: Category> Tokenizer<'r, 'src, C> {
    /// Begin a scan: bind `source` with the cursor at offset 0, line 1,
    /// column 1.
    pub fn new(rules: &'r RuleSet<C>, source: &'src str) -> Self {
        Tokenizer {
            rules,
            source,
            cursor: Cursor::new(),
            state: ScanState::Active,
        }
    }

    /// Rebind the engine to a new source and reset the cursor.
    ///
    /// Invalidates the previous scan entirely — the engine scans a single
    /// input at a time and any progress over the old input is gone.
    pub fn begin_scan(&mut self, source: &'src str) {
        self.source = source;
        self.cursor = Cursor::new();
        self.state = ScanState::Active;
    }

    /// The source text bound to the current scan.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Produce the next token.
    ///
    /// The scanning primitive everything else builds on. Skips any run of
    /// discard-rule matches internally, then returns the next emitted
    /// token, [`Scan::EndOfInput`], or [`Scan::Error`].
    pub fn next_token(&mut self) -> Scan<'src, C> {
        // Field copy so slices keep the full 'src lifetime.
        let source = self.source;

        loop {
            match &self.state {
                ScanState::Finished => return Scan::EndOfInput,
                ScanState::Failed(err) => return Scan::Error(err.clone()),
                ScanState::Active => {}
            }

            if self.cursor.offset() >= source.len() {
                self.state = ScanState::Finished;
                return Scan::EndOfInput;
            }

            let rest = &source[self.cursor.offset()..];

            // Longest-match reduction over the whole table. Strict `>`
            // keeps the first-registered rule on length ties.
            let mut best: Option<(&Rule<C>, &'src str)> = None;
            for rule in self.rules {
                let Some(lexeme) = rule.match_at_start(rest) else {
                    continue;
                };
                if best.map_or(true, |(_, current)| lexeme.len() > current.len()) {
                    best = Some((rule, lexeme));
                }
            }

            let Some((rule, lexeme)) = best else {
                let err = self.unmatched_here();
                self.state = ScanState::Failed(err.clone());
                return Scan::Error(err);
            };

            // Position of the match start, recorded before consuming.
            let line = self.cursor.line();
            let column = self.cursor.column();
            self.cursor.advance(lexeme);

            if rule.emits() {
                return Scan::Token(Token {
                    category: rule.category(),
                    lexeme,
                    line,
                    column,
                });
            }
            // Discarded: consumed and invisible. Keep scanning.
        }
    }

    /// Eagerly scan the rest of the input into a vector.
    ///
    /// # Errors
    ///
    /// Fails as a whole on the first lexical error — no truncated token
    /// sequence is returned. A caller that wants the tokens before the
    /// failure can pull [`stream`](Self::stream) instead.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'src, C>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Scan::Token(token) => tokens.push(token),
                Scan::EndOfInput => return Ok(tokens),
                Scan::Error(err) => return Err(err),
            }
        }
    }

    /// Lazy iteration over the remaining tokens.
    ///
    /// The stream borrows the engine mutably for its whole lifetime:
    /// exactly one active stream per scan, enforced by the borrow checker.
    pub fn stream(&mut self) -> TokenStream<'_, 'r, 'src, C> {
        TokenStream::new(self)
    }

    /// Build the unmatched-input error for the current cursor position.
    fn unmatched_here(&self) -> LexError {
        let source = self.source;
        let offset = self.cursor.offset();

        let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |i| offset + i);

        // Rest of the failing line; when the offending character is the
        // newline itself, the newline is the fragment.
        let fragment = if offset < line_end {
            &source[offset..line_end]
        } else {
            "\n"
        };

        LexError {
            line: self.cursor.line(),
            column: self.cursor.column(),
            offset,
            line_text: source[line_start..line_end].to_string(),
            fragment: fragment.to_string(),
        }
    }
}

/// Eagerly tokenize `source` against `rules`.
///
/// Convenience wrapper for the one-shot case; equivalent to
/// `Tokenizer::new(rules, source).tokenize()`.
///
/// # Errors
///
/// The first [`LexError`], if any position matches no rule.
pub fn tokenize<'src, C: Category>(
    rules: &RuleSet<C>,
    source: &'src str,
) -> Result<Vec<Token<'src, C>>, LexError> {
    Tokenizer::new(rules, source).tokenize()
}

#[cfg(test)]
mod tests;
