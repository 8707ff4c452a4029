//! Rendering for lexical errors and token dumps.
//!
//! The core deliberately reports errors as plain data — position, the
//! failing line's text, the offending fragment — and leaves presentation to
//! this crate:
//! - [`TerminalEmitter`]: caret-pointer error messages with optional ANSI
//!   color.
//! - [`token_table`]: an aligned, human-readable dump of a token slice,
//!   for debugging rule tables.

mod caret;
mod token_table;

pub use caret::{ColorMode, TerminalEmitter};
pub use token_table::render_token_table;
