//! The built-in demo rule table: a C-like token set.
//!
//! Small enough to read in one sitting, rich enough to exercise the
//! engine's interesting paths: whitespace discarding, float-vs-int and
//! `::`-vs-`:` longest-match pairs, and keywords registered ahead of the
//! identifier rule so equal-length ties resolve to the keyword.

use relex_core::{RuleError, RuleSet};

/// Token categories for the demo C-like language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CToken {
    Whitespace,
    KwInt,
    KwFloat,
    KwChar,
    KwString,
    Include,
    Float,
    Int,
    Ident,
    DoubleColon,
    Colon,
    Semicolon,
    Comma,
    Dot,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    LeftStream,
    RightStream,
    LeftAngle,
    RightAngle,
    Ampersand,
    Asterisk,
    Plus,
    Equal,
    Exclamation,
    ForwardSlash,
    BackwardSlash,
    Quote,
    SingleQuote,
}

/// Build the demo rule table.
///
/// # Errors
///
/// Never fails in practice — the patterns are fixed — but registration is
/// fallible by contract, and the driver reports a [`RuleError`] like any
/// other configuration mistake rather than panicking.
pub fn c_like_rules() -> Result<RuleSet<CToken>, RuleError> {
    let mut rules = RuleSet::new();
    rules
        .skip(CToken::Whitespace, r"\s+")?
        // Keywords ahead of Ident: equal-length ties go to the keyword.
        .rule(CToken::KwInt, "int")?
        .rule(CToken::KwFloat, "float")?
        .rule(CToken::KwChar, "char")?
        .rule(CToken::KwString, "string")?
        .rule(CToken::Include, "#include")?
        .rule(CToken::Float, r"[0-9]+\.[0-9]+")?
        .rule(CToken::Int, r"[0-9]+")?
        .rule(CToken::Ident, r"[a-zA-Z_][a-zA-Z0-9_]*")?
        .rule(CToken::DoubleColon, "::")?
        .rule(CToken::Colon, ":")?
        .rule(CToken::Semicolon, ";")?
        .rule(CToken::Comma, ",")?
        .rule(CToken::Dot, r"\.")?
        .rule(CToken::LeftParen, r"\(")?
        .rule(CToken::RightParen, r"\)")?
        .rule(CToken::LeftBrace, r"\{")?
        .rule(CToken::RightBrace, r"\}")?
        .rule(CToken::LeftBracket, r"\[")?
        .rule(CToken::RightBracket, r"\]")?
        .rule(CToken::LeftStream, "<<")?
        .rule(CToken::RightStream, ">>")?
        .rule(CToken::LeftAngle, "<")?
        .rule(CToken::RightAngle, ">")?
        .rule(CToken::Ampersand, "&")?
        .rule(CToken::Asterisk, r"\*")?
        .rule(CToken::Plus, r"\+")?
        .rule(CToken::Equal, "=")?
        .rule(CToken::Exclamation, "!")?
        .rule(CToken::ForwardSlash, "/")?
        .rule(CToken::BackwardSlash, r"\\")?
        .rule(CToken::Quote, "\"")?
        .rule(CToken::SingleQuote, "'")?;
    Ok(rules)
}

#[cfg(test)]
mod tests;
