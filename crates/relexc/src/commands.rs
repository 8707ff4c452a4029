//! The `lex` and `check` commands.
//!
//! Thin glue: read the file, run the engine, hand results to the
//! diagnostic renderers. All process-exit decisions live here and in
//! `main`; the library crates below never exit or print on their own.

use std::io::IsTerminal;

use relex_core::{tokenize, LexError, RuleSet, Tokenizer};
use relex_diagnostic::{render_token_table, ColorMode, TerminalEmitter};
use tracing::debug;

use crate::rules::{c_like_rules, CToken};

/// Exit code for clean runs.
pub const EXIT_OK: i32 = 0;
/// Exit code when lexing (or configuration) failed.
pub const EXIT_FAILURE: i32 = 1;

/// Lex `path` with the demo rule table and print an aligned token dump.
///
/// Returns the process exit code.
pub fn lex_file(path: &str, color: ColorMode) -> i32 {
    let source = read_file(path);
    let rules = match demo_rules(color) {
        Ok(rules) => rules,
        Err(code) => return code,
    };
    debug!(rules = rules.len(), bytes = source.len(), "lexing {path}");

    match tokenize(&rules, &source) {
        Ok(tokens) => {
            debug!(count = tokens.len(), "lexed token sequence");
            print!("{}", render_token_table(&tokens));
            EXIT_OK
        }
        Err(err) => report_lex_error(path, &err, color),
    }
}

/// Lex `path` and report only the verdict: a token count on success, a
/// rendered error and a nonzero exit code on failure.
///
/// Pulls the lazy stream instead of collecting eagerly — `check` wants
/// the verdict, not the tokens.
pub fn check_file(path: &str, color: ColorMode) -> i32 {
    let source = read_file(path);
    let rules = match demo_rules(color) {
        Ok(rules) => rules,
        Err(code) => return code,
    };

    let mut tokenizer = Tokenizer::new(&rules, &source);
    let mut stream = tokenizer.stream();
    let count = stream.by_ref().count();
    match stream.into_error() {
        None => {
            println!("{path}: {count} tokens");
            EXIT_OK
        }
        Some(err) => report_lex_error(path, &err, color),
    }
}

/// Build the demo table, rendering the configuration error on failure.
fn demo_rules(color: ColorMode) -> Result<RuleSet<CToken>, i32> {
    c_like_rules().map_err(|err| {
        let mut emitter = stderr_emitter(color);
        emitter.emit_rule_error(&err);
        EXIT_FAILURE
    })
}

/// Render a lexical error with the caret emitter and return the failure
/// exit code.
fn report_lex_error(path: &str, error: &LexError, color: ColorMode) -> i32 {
    let mut emitter = stderr_emitter(color);
    emitter.emit_lex_error(path, error);
    emitter.flush();
    EXIT_FAILURE
}

fn stderr_emitter(color: ColorMode) -> TerminalEmitter<std::io::Stderr> {
    TerminalEmitter::<std::io::Stderr>::stderr(color, std::io::stderr().is_terminal())
}

/// Read a file from disk, exiting with a user-friendly error message on
/// failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Parse a `--color=<mode>` flag value.
///
/// Unknown values fall back to `Auto` with a warning on stderr rather
/// than aborting — color selection is not worth failing a run over.
pub fn parse_color_flag(value: &str) -> ColorMode {
    match value {
        "always" => ColorMode::Always,
        "never" => ColorMode::Never,
        "auto" => ColorMode::Auto,
        other => {
            eprintln!("unknown color mode '{other}', using 'auto'");
            ColorMode::Auto
        }
    }
}
