// exprc: single-expression compiler front-end

use std::fs;
use std::path::Path;
use std::process;

use exprc::pipeline::{self, Mode};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        let program = args.first().map(|s| s.as_str()).unwrap_or("exprc");
        eprintln!("Error: not enough arguments");
        eprintln!();
        eprintln!(
            "Usage: {} <mode> <input-file> [tokens-file symbols-file]",
            program
        );
        eprintln!();
        eprintln!("Modes:");
        eprintln!("  lex    token and symbol dumps");
        eprintln!("  syn    syntax tree dump");
        eprintln!("  sem    promoted syntax tree dump");
        eprintln!("  gen1   three-address code and extended symbol dump");
        eprintln!("  gen2   postfix code and symbol dump");
        process::exit(1);
    }

    let mode = match Mode::from_arg(&args[1]) {
        Some(mode) => mode,
        None => {
            eprintln!("Error: unknown mode '{}'", args[1]);
            process::exit(1);
        }
    };

    let input_file = &args[2];
    if !Path::new(input_file).exists() {
        eprintln!("Error: file '{}' not found", input_file);
        process::exit(1);
    }

    let source = match fs::read_to_string(input_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", input_file, e);
            process::exit(1);
        }
    };
    // The expression is the last line of the input file.
    let line = source.lines().last().unwrap_or("");

    let tokens_file = args.get(3).map(|s| s.as_str()).unwrap_or("tokens.txt");
    let symbols_file = args.get(4).map(|s| s.as_str()).unwrap_or("symbols.txt");

    let outputs = match pipeline::compile(mode, line, tokens_file, symbols_file) {
        Ok(outputs) => outputs,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    for output in &outputs {
        if let Err(e) = fs::write(&output.name, &output.content) {
            eprintln!("Error: failed to write '{}': {}", output.name, e);
            process::exit(1);
        }
    }
}
