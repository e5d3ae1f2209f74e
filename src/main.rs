use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use lexer::{errors::errors::Error, tokenizer::tokenizer::tokenize};

const SAMPLE_SOURCE: &str = r"Pi = 3.14;
for(Int I = 0; I < 10; ++)
{
Pi + 1.0;
}
Return Pi;";

/// Tokenizes a source file and prints the classified token stream.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the source file to tokenize; the built-in sample program is
    /// used when omitted.
    path: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let source = match &args.path {
        Some(path) => read_to_string(path).map_err(|source| Error::ReadSource {
            path: path.clone(),
            source,
        })?,
        None => String::from(SAMPLE_SOURCE),
    };

    let start = Instant::now();
    let tokens = tokenize(&source);
    let elapsed = start.elapsed();

    for token in &tokens {
        println!("{}", token);
    }
    println!("Tokenized {} tokens in {:?}", tokens.len(), elapsed);

    Ok(())
}
