use super::{c_like_rules, CToken};
use pretty_assertions::assert_eq;
use relex_core::tokenize;

fn categories(source: &str) -> Vec<CToken> {
    let rules = c_like_rules().expect("demo table builds");
    tokenize(&rules, source)
        .expect("source lexes")
        .iter()
        .map(|t| t.category)
        .collect()
}

#[test]
fn demo_table_builds() {
    let rules = c_like_rules().expect("demo table builds");
    assert!(!rules.is_empty());
}

#[test]
fn declaration_statement() {
    assert_eq!(
        categories("int count = 42;"),
        vec![
            CToken::KwInt,
            CToken::Ident,
            CToken::Equal,
            CToken::Int,
            CToken::Semicolon
        ]
    );
}

#[test]
fn keywords_beat_identifiers_on_ties() {
    assert_eq!(categories("int"), vec![CToken::KwInt]);
    // Longer identifiers win outright.
    assert_eq!(categories("integer"), vec![CToken::Ident]);
}

#[test]
fn float_beats_int_by_length() {
    assert_eq!(categories("3.14"), vec![CToken::Float]);
    assert_eq!(
        categories("3 . 14"),
        vec![CToken::Int, CToken::Dot, CToken::Int]
    );
}

#[test]
fn stream_operators_beat_angles() {
    assert_eq!(
        categories("cout << x >> y"),
        vec![
            CToken::Ident,
            CToken::LeftStream,
            CToken::Ident,
            CToken::RightStream,
            CToken::Ident
        ]
    );
    assert_eq!(
        categories("a < b > c"),
        vec![
            CToken::Ident,
            CToken::LeftAngle,
            CToken::Ident,
            CToken::RightAngle,
            CToken::Ident
        ]
    );
}

#[test]
fn double_colon_beats_colon() {
    assert_eq!(
        categories("std::string x:"),
        vec![
            CToken::Ident,
            CToken::DoubleColon,
            CToken::KwString,
            CToken::Ident,
            CToken::Colon
        ]
    );
}

#[test]
fn include_directive() {
    assert_eq!(
        categories("#include <stdio.h>"),
        vec![
            CToken::Include,
            CToken::LeftAngle,
            CToken::Ident,
            CToken::Dot,
            CToken::Ident,
            CToken::RightAngle
        ]
    );
}

#[test]
fn unknown_character_is_a_lex_error() {
    let rules = c_like_rules().expect("demo table builds");
    let err = tokenize(&rules, "int @").expect_err("@ matches no rule");
    assert_eq!((err.line, err.column), (1, 5));
}
