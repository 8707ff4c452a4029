use crate::{tokenize, RuleSet, Scan, Token, Tokenizer};
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tok {
    Space,
    Keyword,
    Ident,
    Int,
    Float,
    Colon,
    DoubleColon,
    Block,
}

/// The shared table for most tests: whitespace skipped, overlapping
/// numeric rules, keyword registered ahead of the identifier rule.
fn table() -> RuleSet<Tok> {
    let mut rules = RuleSet::new();
    rules
        .skip(Tok::Space, r"\s+")
        .and_then(|r| r.rule(Tok::Keyword, r"let"))
        .and_then(|r| r.rule(Tok::Ident, r"[a-zA-Z_][a-zA-Z0-9_]*"))
        .and_then(|r| r.rule(Tok::Int, r"[0-9]+"))
        .and_then(|r| r.rule(Tok::Float, r"[0-9]+\.[0-9]+"))
        .and_then(|r| r.rule(Tok::Colon, r":"))
        .and_then(|r| r.rule(Tok::DoubleColon, r"::"))
        .expect("table patterns compile");
    rules
}

fn categories(tokens: &[Token<'_, Tok>]) -> Vec<Tok> {
    tokens.iter().map(|t| t.category).collect()
}

fn lexemes<'src>(tokens: &[Token<'src, Tok>]) -> Vec<&'src str> {
    tokens.iter().map(|t| t.lexeme).collect()
}

// === Basic Scanning ===

#[test]
fn simple_sequence() {
    let rules = table();
    let tokens = tokenize(&rules, "let x1 42").expect("covered input lexes");
    assert_eq!(
        categories(&tokens),
        vec![Tok::Keyword, Tok::Ident, Tok::Int]
    );
    assert_eq!(lexemes(&tokens), vec!["let", "x1", "42"]);
}

#[test]
fn empty_input_is_end_of_input() {
    let rules = table();
    let mut tokenizer = Tokenizer::new(&rules, "");
    assert_eq!(tokenizer.next_token(), Scan::EndOfInput);
    assert_eq!(tokenize(&rules, "").expect("empty input lexes"), vec![]);
}

#[test]
fn end_of_input_is_repeatable() {
    let rules = table();
    let mut tokenizer = Tokenizer::new(&rules, "x");
    assert!(matches!(tokenizer.next_token(), Scan::Token(_)));
    assert_eq!(tokenizer.next_token(), Scan::EndOfInput);
    assert_eq!(tokenizer.next_token(), Scan::EndOfInput);
}

// === Longest Match ===

#[test]
fn longest_match_wins_across_rules() {
    let rules = table();
    let tokens = tokenize(&rules, "12.5").expect("float lexes");
    // One Float token, not Int("12") followed by anything.
    assert_eq!(categories(&tokens), vec![Tok::Float]);
    assert_eq!(tokens[0].lexeme, "12.5");
}

#[test]
fn longest_match_is_per_position() {
    let rules = table();
    let tokens = tokenize(&rules, "12 12.5").expect("input lexes");
    assert_eq!(categories(&tokens), vec![Tok::Int, Tok::Float]);
}

#[test]
fn double_colon_beats_colon_regardless_of_order() {
    // `::` is registered after `:` — longest match, not order, decides.
    let rules = table();
    let tokens = tokenize(&rules, "a::b:c").expect("input lexes");
    assert_eq!(
        categories(&tokens),
        vec![
            Tok::Ident,
            Tok::DoubleColon,
            Tok::Ident,
            Tok::Colon,
            Tok::Ident
        ]
    );
}

// === Tie-Break Determinism ===

#[test]
fn equal_length_tie_goes_to_first_registered() {
    // Keyword before Ident: "let" is a Keyword.
    let rules = table();
    let tokens = tokenize(&rules, "let letter").expect("input lexes");
    assert_eq!(categories(&tokens), vec![Tok::Keyword, Tok::Ident]);
    // "letter" is longer than "let", so the identifier rule wins that one
    // outright — maximal munch keeps keywords from truncating identifiers.
    assert_eq!(tokens[1].lexeme, "letter");
}

#[test]
fn tie_break_follows_registration_order_when_inverted() {
    // Same two patterns, opposite order: now "let" is an Ident.
    let mut rules = RuleSet::new();
    rules
        .rule(Tok::Ident, r"[a-z]+")
        .and_then(|r| r.rule(Tok::Keyword, r"let"))
        .expect("patterns compile");
    let tokens = tokenize(&rules, "let").expect("input lexes");
    assert_eq!(categories(&tokens), vec![Tok::Ident]);
}

#[test]
fn tie_break_is_reproducible() {
    let rules = table();
    for _ in 0..16 {
        let tokens = tokenize(&rules, "let").expect("input lexes");
        assert_eq!(categories(&tokens), vec![Tok::Keyword]);
    }
}

// === Discard Transparency ===

#[test]
fn whitespace_only_input_yields_nothing() {
    let rules = table();
    let tokens = tokenize(&rules, " \t \n  ").expect("whitespace lexes");
    assert_eq!(tokens, vec![]);
}

#[test]
fn next_token_never_surfaces_discards() {
    let rules = table();
    let mut tokenizer = Tokenizer::new(&rules, "  a  b  ");
    assert!(matches!(tokenizer.next_token(), Scan::Token(t) if t.lexeme == "a"));
    assert!(matches!(tokenizer.next_token(), Scan::Token(t) if t.lexeme == "b"));
    assert_eq!(tokenizer.next_token(), Scan::EndOfInput);
}

#[test]
fn discarded_text_still_advances_position() {
    let rules = table();
    let tokens = tokenize(&rules, "  a").expect("input lexes");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[0].column, 3);
}

// === Position Tracking ===

#[test]
fn position_tracking_across_newline() {
    let rules = table();
    let tokens = tokenize(&rules, "ab\ncd").expect("input lexes");
    assert_eq!(
        tokens,
        vec![
            Token {
                category: Tok::Ident,
                lexeme: "ab",
                line: 1,
                column: 1
            },
            Token {
                category: Tok::Ident,
                lexeme: "cd",
                line: 2,
                column: 1
            },
        ]
    );
}

#[test]
fn token_position_is_match_start_not_match_end() {
    let rules = table();
    let tokens = tokenize(&rules, "abc de").expect("input lexes");
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
}

#[test]
fn multiline_lexeme_advances_line_for_followers() {
    let mut rules = RuleSet::new();
    rules
        .skip(Tok::Space, r"[ \t]+")
        .and_then(|r| r.rule(Tok::Block, r"<(?s:[^>]*)>"))
        .and_then(|r| r.rule(Tok::Ident, r"[a-z]+"))
        .expect("patterns compile");
    let tokens = tokenize(&rules, "<x\ny> z").expect("input lexes");
    assert_eq!(tokens[0].lexeme, "<x\ny>");
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    // The block consumed one newline and two characters on line 2.
    assert_eq!((tokens[1].line, tokens[1].column), (2, 4));
}

// === Unmatched Input ===

#[test]
fn unmatched_input_reports_exact_position() {
    let rules = table();
    let err = tokenize(&rules, "ab @cd").expect_err("@ matches no rule");
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 4);
    assert_eq!(err.offset, 3);
    assert_eq!(err.line_text, "ab @cd");
    assert_eq!(err.fragment, "@cd");
}

#[test]
fn unmatched_input_on_later_line() {
    let rules = table();
    let err = tokenize(&rules, "ok\n  @").expect_err("@ matches no rule");
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 3);
    assert_eq!(err.line_text, "  @");
    assert_eq!(err.fragment, "@");
}

#[test]
fn unmatched_newline_reports_the_newline() {
    // No whitespace rule at all: the newline itself is unmatched.
    let mut rules = RuleSet::new();
    rules.rule(Tok::Ident, r"[a-z]+").expect("pattern compiles");
    let err = tokenize(&rules, "ab\ncd").expect_err("newline matches no rule");
    assert_eq!((err.line, err.column), (1, 3));
    assert_eq!(err.line_text, "ab");
    assert_eq!(err.fragment, "\n");
}

#[test]
fn error_is_replayed_on_further_calls() {
    let rules = table();
    let mut tokenizer = Tokenizer::new(&rules, "@");
    let Scan::Error(first) = tokenizer.next_token() else {
        panic!("expected a lexical error");
    };
    let Scan::Error(second) = tokenizer.next_token() else {
        panic!("expected the error to replay");
    };
    assert_eq!(first, second);
}

#[test]
fn eager_scan_fails_as_a_whole() {
    let rules = table();
    // Tokens before the bad position are not silently returned.
    let result = tokenize(&rules, "good good @");
    assert!(result.is_err());
}

#[test]
fn empty_rule_set_fails_on_any_input() {
    let rules: RuleSet<Tok> = RuleSet::new();
    let err = tokenize(&rules, "x").expect_err("nothing can match");
    assert_eq!((err.line, err.column), (1, 1));
}

// === Rescanning ===

#[test]
fn begin_scan_resets_cursor_and_state() {
    let rules = table();
    let mut tokenizer = Tokenizer::new(&rules, "a b");
    let first = tokenizer.tokenize().expect("first scan lexes");
    assert_eq!(first.len(), 2);

    tokenizer.begin_scan("c");
    assert_eq!(tokenizer.source(), "c");
    let second = tokenizer.tokenize().expect("second scan lexes");
    assert_eq!(lexemes(&second), vec!["c"]);
    assert_eq!((second[0].line, second[0].column), (1, 1));
}

#[test]
fn begin_scan_clears_a_failed_state() {
    let rules = table();
    let mut tokenizer = Tokenizer::new(&rules, "@");
    assert!(matches!(tokenizer.next_token(), Scan::Error(_)));

    tokenizer.begin_scan("ok");
    assert!(matches!(tokenizer.next_token(), Scan::Token(t) if t.lexeme == "ok"));
}

// === Lazy/Eager Equivalence ===

#[test]
fn stream_matches_eager_output() {
    let rules = table();
    let source = "let answer 42 3.14 a::b";
    let eager = tokenize(&rules, source).expect("input lexes");

    let mut tokenizer = Tokenizer::new(&rules, source);
    let lazy: Vec<Token<'_, Tok>> = tokenizer.stream().collect();
    assert_eq!(eager, lazy);
}

// === Round-Trip ===

mod proptest_round_trip {
    use super::{table, Tok};
    use crate::tokenize;
    use proptest::prelude::*;

    proptest! {
        /// Inputs built by joining valid lexemes with whitespace lex back
        /// to exactly those lexemes, and concatenating tokens with the
        /// discarded separators reconstructs the input verbatim.
        #[test]
        fn words_and_numbers_round_trip(
            pieces in proptest::collection::vec(
                prop_oneof![
                    "[a-zA-Z_][a-zA-Z0-9_]{0,6}".prop_map(|s| (Tok::Ident, s)),
                    "[0-9]{1,6}".prop_map(|s| (Tok::Int, s)),
                    "[0-9]{1,3}\\.[0-9]{1,3}".prop_map(|s| (Tok::Float, s)),
                ],
                0..24,
            ),
            separator in prop_oneof![Just(" "), Just("\t"), Just("\n"), Just("  \n ")],
        ) {
            let source: String = pieces
                .iter()
                .map(|(_, lexeme)| lexeme.as_str())
                .collect::<Vec<_>>()
                .join(separator);

            let rules = table();
            let tokens = tokenize(&rules, &source).expect("constructed input lexes");

            // Category sequence matches, except keyword/identifier ties:
            // a generated identifier spelled exactly `let` lexes as the
            // earlier-registered Keyword rule.
            let expected: Vec<Tok> = pieces
                .iter()
                .map(|(cat, lexeme)| if lexeme == "let" { Tok::Keyword } else { *cat })
                .collect();
            prop_assert_eq!(
                tokens.iter().map(|t| t.category).collect::<Vec<_>>(),
                expected
            );

            // Lexemes reproduce the joined pieces verbatim.
            prop_assert_eq!(
                tokens.iter().map(|t| t.lexeme.to_string()).collect::<Vec<_>>(),
                pieces.iter().map(|(_, l)| l.clone()).collect::<Vec<_>>()
            );

            // Reconstruction: lexemes interleaved with the separators give
            // back the original source.
            let rebuilt: String = tokens
                .iter()
                .map(|t| t.lexeme)
                .collect::<Vec<_>>()
                .join(separator);
            prop_assert_eq!(rebuilt, source);
        }
    }
}
