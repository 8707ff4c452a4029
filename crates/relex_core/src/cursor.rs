//! Scan cursor: byte offset plus 1-based line/column bookkeeping.
//!
//! The cursor only ever moves forward, and only by whole lexemes — the
//! engine resolves a match (or a discard) and hands the consumed text to
//! [`Cursor::advance`]. Position accounting walks the consumed characters:
//! a newline bumps the line and resets the column to 1, anything else bumps
//! the column by 1. Columns therefore count characters, not bytes.
//!
//! # Invariant
//!
//! `offset` always points at a fully resolved position: everything before
//! it has been tokenized or discarded. It never rewinds.

/// Engine-private scan position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Cursor {
    /// Byte offset into the source.
    offset: usize,
    /// 1-based line number at `offset`.
    line: u32,
    /// 1-based column number at `offset`, in characters.
    column: u32,
}

impl Cursor {
    /// Cursor at the start of input: offset 0, line 1, column 1.
    pub(crate) fn new() -> Self {
        Cursor {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current byte offset.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Current 1-based line.
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column.
    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    /// Consume one lexeme: advance the offset by its byte length and fold
    /// its characters into the line/column counters.
    ///
    /// Only the winning lexeme's text passes through here — position
    /// updates never run over skipped-ahead input, because the engine never
    /// skips ahead.
    pub(crate) fn advance(&mut self, lexeme: &str) {
        for ch in lexeme.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += lexeme.len();
    }
}
