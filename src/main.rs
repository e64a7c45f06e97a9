use std::fs;
use std::io::{self, BufRead, Write};

use clap::Parser;

/// jerboa is a small imperative programming language with integer
/// arithmetic, arrays, and parameterless functions over a global
/// environment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells jerboa to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Suppresses the dump of the final variable environment.
    #[arg(short, long)]
    no_dump: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let input_line = || {
        // Anything written so far acts as the prompt for this read.
        io::stdout().flush().ok();
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok();
        line.trim_end_matches(['\n', '\r']).to_string()
    };
    let output_text = |text: &str| {
        print!("{text}");
    };

    match jerboa::run(&script, input_line, output_text) {
        Ok(state) => {
            if !args.no_dump {
                println!("{state}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
