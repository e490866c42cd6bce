//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the source text is attached, labels are rendered as `line:col`
//! with the offending line and a caret underline.

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => colors::ERROR,
        Severity::Warning => colors::WARNING,
    }
}

/// Color output mode for terminal emitter.
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
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

struct AttachedSource {
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<AttachedSource>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
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
            source: None,
        }
    }

    /// Attach the source text so labels render with line and column.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let text = source.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(AttachedSource { text, lines });
        self
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        self.write_colored(severity.as_str(), severity_color(severity));
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Render the label. Without source the raw byte span is shown.
    fn write_label(&mut self, label: &Label, severity: Severity) {
        let color = severity_color(severity);

        let Some(source) = &self.source else {
            let _ = write!(self.writer, "  --> {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = source
            .lines
            .offset_to_line_col(&source.text, label.span.start);
        let line_text = source
            .lines
            .line_text(&source.text, line)
            .unwrap_or_default()
            .to_string();
        let width = line.to_string().len();
        let pad = " ".repeat(width);

        // Underline at least one column, and never past the end of the line.
        let remaining = line_text.chars().count().saturating_sub(col as usize - 1);
        let span_chars = source
            .text
            .get(label.span.to_range())
            .map_or(0, |s| s.chars().count());
        let carets = "^".repeat(span_chars.min(remaining).max(1));
        let indent = " ".repeat(col as usize - 1);

        let _ = writeln!(self.writer, "{pad}--> {line}:{col}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");
        let _ = write!(self.writer, "{pad} | {indent}");
        self.write_colored(&format!("{carets} {}", label.message), color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(label) = &diagnostic.label {
            self.write_label(label, diagnostic.severity);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use falcon_ir::Span;
    use pretty_assertions::assert_eq;

    fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
        let mut emitter = emitter;
        emitter.emit(diag);
        emitter.flush();
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    fn plain() -> TerminalEmitter<Vec<u8>> {
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
    }

    #[test]
    fn test_without_source_shows_byte_span() {
        let diag = Diagnostic::new(ErrorCode::E2004)
            .with_message("division by zero")
            .with_label(Span::new(8, 14), "divisor is zero")
            .with_note("the variable was not bound");

        let text = render(plain(), &diag);
        assert_eq!(
            text,
            "error[E2004]: division by zero\n  --> 8..14: divisor is zero\n  = note: the variable was not bound\n\n"
        );
    }

    #[test]
    fn test_with_source_shows_line_and_caret() {
        let diag = Diagnostic::new(ErrorCode::E1001)
            .with_message("expected `;`, found `=`")
            .with_label(Span::new(7, 8), "unexpected `=`");

        let text = render(plain().with_source("a || b = c || d;"), &diag);
        assert_eq!(
            text,
            "error[E1001]: expected `;`, found `=`\n\
             \x20--> 1:8\n\
             \x20 |\n\
             1 | a || b = c || d;\n\
             \x20 |        ^ unexpected `=`\n\n"
        );
    }

    #[test]
    fn test_caret_covers_span_on_second_line() {
        let diag = Diagnostic::new(ErrorCode::E2002)
            .with_message("undefined variable `total`")
            .with_label(Span::new(7, 12), "not found");

        let text = render(plain().with_source("int a;\ntotal = 1;"), &diag);
        assert!(text.contains("2 | total = 1;"));
        assert!(text.contains("  | ^^^^^ not found"));
    }

    #[test]
    fn test_with_color_emits_ansi() {
        let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
        let diag = Diagnostic::new(ErrorCode::W3001).with_message("`break` outside of a loop");
        let text = render(emitter, &diag);
        assert!(text.contains("\x1b["));
        assert!(text.contains("W3001"));
    }

    #[test]
    fn test_emit_summary() {
        let mut emitter = plain();
        emitter.emit_summary(2, 1);
        emitter.emit_summary(0, 3);
        emitter.emit_summary(0, 0);
        let text = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(
            text,
            "error: aborting due to 2 previous errors; 1 warning emitted\nwarning: 3 warnings emitted\n"
        );
    }

    #[test]
    fn test_color_mode() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
        assert_eq!(ColorMode::from_flag("never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::from_flag("sometimes"), None);
        assert_eq!(ColorMode::default(), ColorMode::Auto);
    }
}
