//! relex CLI
//!
//! Lexes files with the built-in demo rule table.

use relex_diagnostic::ColorMode;
use relexc::commands::{check_file, lex_file, parse_color_flag};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];
    let mut path: Option<&str> = None;
    let mut color = ColorMode::Auto;

    for arg in &args[2..] {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = parse_color_flag(value);
        } else if arg.starts_with('-') {
            eprintln!("unknown option '{arg}'");
            print_usage();
            std::process::exit(1);
        } else if path.is_none() {
            path = Some(arg);
        } else {
            eprintln!("unexpected argument '{arg}'");
            print_usage();
            std::process::exit(1);
        }
    }

    let code = match command.as_str() {
        "lex" => {
            let Some(path) = path else {
                eprintln!("Usage: relex lex <file> [--color=auto|always|never]");
                std::process::exit(1);
            };
            lex_file(path, color)
        }
        "check" => {
            let Some(path) = path else {
                eprintln!("Usage: relex check <file> [--color=auto|always|never]");
                std::process::exit(1);
            };
            check_file(path, color)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        other => {
            eprintln!("unknown command '{other}'");
            print_usage();
            1
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    eprintln!("relex - table-driven tokenizer");
    eprintln!();
    eprintln!("Usage: relex <command> [arguments]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file>     Tokenize a file and print the token table");
    eprintln!("  check <file>   Tokenize a file and report only success/failure");
    eprintln!("  help           Show this help");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --color=<mode>  Color output: auto (default), always, never");
}
