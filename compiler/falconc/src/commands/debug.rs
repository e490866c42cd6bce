//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::Write;

use falcon_diagnostic::emitter::ColorMode;
use falcon_lexer::tokenize;
use falcon_parse::parse;

use super::{read_file, Console};

/// Print the token stream of a file, one token per line.
pub fn lex_file(path: &str, color: ColorMode) {
    let source = read_file(path);
    if !lex_text(&source, &mut Console::stdio(color)) {
        std::process::exit(1);
    }
}

pub fn lex_text<W: Write, E: Write>(source: &str, console: &mut Console<W, E>) -> bool {
    for item in tokenize(source) {
        match item {
            Ok(token) => {
                let _ = writeln!(console.out, "{token}");
            }
            Err(err) => {
                let _ = console.out.flush();
                console.report(source, &[err.to_diagnostic()]);
                return false;
            }
        }
    }
    let _ = console.out.flush();
    true
}

/// Print the syntax tree of a file.
pub fn parse_file(path: &str, color: ColorMode) {
    let source = read_file(path);
    if !parse_text(&source, &mut Console::stdio(color)) {
        std::process::exit(1);
    }
}

pub fn parse_text<W: Write, E: Write>(source: &str, console: &mut Console<W, E>) -> bool {
    match parse(source) {
        Ok(program) => {
            let _ = write!(console.out, "{}", program.display_tree());
            let _ = console.out.flush();
            true
        }
        Err(err) => {
            console.report(source, &[err.to_diagnostic()]);
            false
        }
    }
}
