//! Lazy, forward-only token stream over a running [`Tokenizer`].
//!
//! Strictly cooperative pull: each `next()` costs exactly one
//! [`Tokenizer::next_token`] call, no read-ahead, no buffering. The stream
//! ends on end of input, or early on a lexical error; the error is kept and
//! exposed after termination so a consumer driving the iterator to
//! exhaustion can still distinguish "clean end" from "failed scan".

use crate::error::LexError;
use crate::token::{Category, Token};
use crate::tokenizer::{Scan, Tokenizer};

/// Iterator adapter over [`Tokenizer::next_token`].
///
/// Created by [`Tokenizer::stream`]. Borrows the engine mutably, so a
/// second concurrently positioned stream over the same scan is
/// unrepresentable; starting a new scan ([`Tokenizer::begin_scan`])
/// requires this stream to be gone first.
#[derive(Debug)]
pub struct TokenStream<'t, 'r, 'src, C> {
    tokenizer: &'t mut Tokenizer<'r, 'src, C>,
    error: Option<LexError>,
}

impl<'t, 'r, 'src, C: Category> TokenStream<'t, 'r, 'src, C> {
    pub(crate) fn new(tokenizer: &'t mut Tokenizer<'r, 'src, C>) -> Self {
        TokenStream {
            tokenizer,
            error: None,
        }
    }

    /// The lexical error that terminated the stream, if any.
    ///
    /// `None` while tokens remain and after a clean end of input.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Consume the stream, yielding the terminating error, if any.
    pub fn into_error(self) -> Option<LexError> {
        self.error
    }
}

impl<'t, 'r, 'src, C: Category> Iterator for TokenStream<'t, 'r, 'src, C> {
    type Item = Token<'src, C>;

    fn next(&mut self) -> Option<Self::Item> {
        // Stay terminated once an error was seen; the engine would replay
        // the error anyway, but there is no need to ask it again.
        if self.error.is_some() {
            return None;
        }
        match self.tokenizer.next_token() {
            Scan::Token(token) => Some(token),
            Scan::EndOfInput => None,
            Scan::Error(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}
