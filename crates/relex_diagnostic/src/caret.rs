//! Caret-pointer rendering of lexical errors.
//!
//! Human-readable output with optional ANSI color:
//!
//! ```text
//! error: unmatched input `@cd` at line 1, column 4
//!  --> src/input.txt:1:4
//!   |
//! 1 | ab @cd
//!   |    ^
//! ```

use std::io::{self, Write};

use relex_core::{LexError, RuleError};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` decides; the parameter is ignored for
    /// `Always` and `Never`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter {
            writer: io::stderr(),
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Emit a lexical error as a caret-pointer message.
    ///
    /// `path` names the scanned input in the `-->` arrow line; pass
    /// something like `"<stdin>"` when no file is involved.
    pub fn emit_lex_error(&mut self, path: &str, error: &LexError) {
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!(": {error}"), colors::BOLD);
        let _ = writeln!(self.writer);

        let line_label = error.line.to_string();
        let gutter = " ".repeat(line_label.len());

        self.write_colored(
            &format!("{gutter}--> {path}:{}:{}", error.line, error.column),
            colors::GUTTER,
        );
        let _ = writeln!(self.writer);

        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer);

        self.write_colored(&format!("{line_label} | "), colors::GUTTER);
        let _ = writeln!(self.writer, "{}", error.line_text);

        self.write_colored(&format!("{gutter} | "), colors::GUTTER);
        let indent = " ".repeat(error.column.saturating_sub(1) as usize);
        self.write_colored(&format!("{indent}^"), colors::ERROR);
        let _ = writeln!(self.writer);
    }

    /// Emit a rule registration error.
    ///
    /// Configuration errors carry no source position — the offending
    /// pattern is named in the message itself.
    pub fn emit_rule_error(&mut self, error: &RuleError) {
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!(": {error}"), colors::BOLD);
        let _ = writeln!(self.writer);
    }

    /// Flush buffered output.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Consume the emitter, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
