//! Falcon interpreter CLI.

use std::io;

use falcon_diagnostic::emitter::ColorMode;
use falconc::commands::{lex_file, parse_file, run_file, Console};
use falconc::{init_tracing, Repl, ReplConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut verbose = false;
    let mut color = ColorMode::Auto;
    let mut positional: Vec<&str> = Vec::new();

    for arg in &args {
        if arg == "--verbose" || arg == "-v" {
            verbose = true;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::from_flag(value) else {
                eprintln!("error: invalid color mode '{value}' (expected auto, always or never)");
                std::process::exit(1);
            };
            color = mode;
        } else {
            positional.push(arg.as_str());
        }
    }

    match positional.as_slice() {
        [] | ["repl"] => run_repl(ReplConfig { verbose }, color),
        ["run", path] => run_file(path, color),
        ["lex", path] => lex_file(path, color),
        ["parse", path] => parse_file(path, color),
        [command @ ("run" | "lex" | "parse")] => {
            eprintln!("Usage: falcon {command} <file.fcn>");
            std::process::exit(1);
        }
        ["help" | "--help" | "-h"] => print_usage(),
        ["version" | "--version" | "-V"] => {
            println!("Falcon {}", env!("CARGO_PKG_VERSION"));
        }
        [path]
            if std::path::Path::new(path)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("fcn")) =>
        {
            run_file(path, color);
        }
        [command, ..] => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn run_repl(config: ReplConfig, color: ColorMode) {
    let mut repl = Repl::new(config);
    let mut console = Console::stdio(color);
    if let Err(e) = repl.run(io::stdin().lock(), &mut console) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Falcon interpreter");
    println!();
    println!("Usage: falcon [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive prompt (default)");
    println!("  run <file.fcn>       Run a Falcon program");
    println!("  lex <file.fcn>       Tokenize and display tokens");
    println!("  parse <file.fcn>     Parse and display the syntax tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  -v, --verbose        Print each statement's syntax tree in the REPL");
    println!("  --color=<mode>       Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing output (e.g. RUST_LOG=falcon_eval=trace)");
    println!();
    println!("Examples:");
    println!("  falcon");
    println!("  falcon run main.fcn");
    println!("  falcon main.fcn --color=never");
    println!("  falcon parse main.fcn");
}
