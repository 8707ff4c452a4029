//! Token record and the category seam.

use std::fmt;

/// Marker bound for token category types.
///
/// Categories are caller-defined closed enumerations: a small `Copy` enum
/// that consumers can pattern-match exhaustively. Any type meeting the
/// bounds qualifies via the blanket impl; callers never implement this
/// by hand.
pub trait Category: Copy + Eq + fmt::Debug {}

impl<T: Copy + Eq + fmt::Debug> Category for T {}

/// A classified slice of the scanned source.
///
/// Produced by [`Tokenizer::next_token`](crate::Tokenizer::next_token) when
/// a match is resolved, and never mutated afterwards. The lexeme borrows the
/// source text directly — no copying happens during scanning.
///
/// `line` and `column` are 1-based and denote the position of the **start**
/// of the match in the original input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Token<'src, C> {
    /// The category the winning rule was registered under.
    pub category: C,
    /// The exact matched substring. Non-empty: empty-matching patterns are
    /// rejected at registration.
    pub lexeme: &'src str,
    /// 1-based line of the first character of the lexeme.
    pub line: u32,
    /// 1-based column of the first character of the lexeme.
    pub column: u32,
}

impl<'src, C: Category> Token<'src, C> {
    /// Byte length of the lexeme.
    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    /// True when the lexeme is empty. Kept for `len`/`is_empty` pairing;
    /// tokens produced by the engine always return `false` here.
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}
