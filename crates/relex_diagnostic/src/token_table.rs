//! Aligned, human-readable dump of a token sequence.
//!
//! Debug aid for rule-table authors: one row per token, positions and
//! lexemes padded into columns so category drift is easy to spot.

use std::fmt::Write;

use relex_core::{Category, Token};

/// Render `tokens` as an aligned table.
///
/// ```text
/// 1:1  let   (Keyword)
/// 1:5  count (Ident)
/// 2:1  42    (Int)
/// ```
///
/// Lexemes are rendered with control characters escaped so a newline
/// inside a token cannot break the table.
pub fn render_token_table<C: Category>(tokens: &[Token<'_, C>]) -> String {
    let mut line_width = 0;
    let mut column_width = 0;
    let mut lexeme_width = 0;

    let printable: Vec<String> = tokens
        .iter()
        .map(|token| token.lexeme.escape_debug().to_string())
        .collect();

    for (token, lexeme) in tokens.iter().zip(&printable) {
        line_width = line_width.max(token.line.to_string().len());
        column_width = column_width.max(token.column.to_string().len());
        lexeme_width = lexeme_width.max(lexeme.chars().count());
    }

    let mut out = String::new();
    for (token, lexeme) in tokens.iter().zip(&printable) {
        let _ = writeln!(
            out,
            "{:>line_width$}:{:<column_width$} {:<lexeme_width$} ({:?})",
            token.line, token.column, lexeme, token.category,
        );
    }
    out
}
