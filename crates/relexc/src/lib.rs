//! Command-line driver for the relex tokenizer.
//!
//! Wires the core engine to the filesystem and the terminal: reads a
//! source file, lexes it with the built-in C-like demo rule table, and
//! prints either an aligned token dump (`lex`) or just the verdict
//! (`check`). Caret-pointer error rendering comes from `relex_diagnostic`.

pub mod commands;
pub mod rules;
