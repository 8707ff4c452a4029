//! Table-driven tokenizer core.
//!
//! A generic lexical analyzer: callers register `(category, pattern,
//! emit/discard)` rules in a [`RuleSet`], then scan a source string with a
//! [`Tokenizer`], either eagerly ([`tokenize`]) or lazily through the
//! [`TokenStream`] iterator.
//!
//! # Matching Discipline
//!
//! Every rule is attempted anchored exactly at the scan cursor (a match may
//! not begin later in the input). Among matching rules the longest lexeme
//! wins (maximal munch); ties go to the rule registered first. Rules marked
//! as skips (whitespace, comments) are consumed silently and never surface
//! to the consumer.
//!
//! # Failure Model
//!
//! Two error kinds, nothing else:
//! - [`RuleError`] at registration time, for patterns that are malformed or
//!   can match the empty string.
//! - [`LexError`] at scan time, when no rule matches at the cursor. The scan
//!   freezes at the failing position; recovery strategies are the caller's
//!   business.
//!
//! End of input is a normal terminal signal ([`Scan::EndOfInput`]), not an
//! error.
//!
//! # Example
//!
//! ```
//! use relex_core::{RuleSet, Tokenizer};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Tok {
//!     Word,
//!     Number,
//!     Space,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rules = RuleSet::new();
//! rules
//!     .skip(Tok::Space, r"\s+")?
//!     .rule(Tok::Word, r"[a-zA-Z]+")?
//!     .rule(Tok::Number, r"[0-9]+")?;
//!
//! let mut tokenizer = Tokenizer::new(&rules, "fourty 2");
//! let tokens = tokenizer.tokenize()?;
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].lexeme, "fourty");
//! assert_eq!(tokens[1].category, Tok::Number);
//! # Ok(())
//! # }
//! ```

mod cursor;
mod error;
mod rule_set;
mod stream;
mod token;
mod tokenizer;

pub use error::{LexError, RuleError};
pub use rule_set::{Rule, RuleAction, RuleSet};
pub use stream::TokenStream;
pub use token::{Category, Token};
pub use tokenizer::{tokenize, Scan, Tokenizer};
