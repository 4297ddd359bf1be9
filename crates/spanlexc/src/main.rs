//! spanlex CLI
//!
//! Tokenizes and checks INI files.

use std::io::IsTerminal;
use std::process::ExitCode;

use spanlexc::{init_tracing, run, Options};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("help" | "--help" | "-h") => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Some("version" | "--version" | "-V") => {
            println!("spanlex {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Some(_) => {}
    }

    let mut options = match Options::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            return ExitCode::from(2);
        }
    };
    options.color = std::io::stderr().is_terminal();
    init_tracing(options.verbose);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match run(&options, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("spanlex - INI tokenizer built on the spanlex grammar engine");
    println!();
    println!("Usage: spanlex <command> [options] <files...>");
    println!();
    println!("Commands:");
    println!("  tokenize <files...>  Print every token as `line:col Kind \"text\"`");
    println!("  check <files...>     Report files that are not valid INI (exit status 1)");
    println!("  sections <files...>  Print sections and entries");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --json               Emit JSON instead of text");
    println!("  --no-parallel        Process files one at a time");
    println!("  -v, --verbose        Report accepted files; debug logging unless RUST_LOG is set");
    println!();
    println!("Logging is configured with RUST_LOG, e.g. RUST_LOG=spanlex_grammar=trace.");
}
