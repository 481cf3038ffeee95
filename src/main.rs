use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use chiwis::{format_error, lexer::lexer::tokenize, parser::parser::parse};
use clap::Parser;
use log::info;

/// Lexical and structural checker for Chiwis programs
#[derive(Parser, Debug)]
#[command(name = "chiwis")]
#[command(version = "0.1.0")]
#[command(about = "Checks that a Chiwis program is lexically and structurally valid")]
struct Cli {
    /// Source file to check, `-` reads stdin
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Print the token trace before validating
    #[arg(long)]
    tokens: bool,

    /// Do not print anything on success
    #[arg(short, long)]
    quiet: bool,
}

fn read_source(input: &PathBuf) -> io::Result<String> {
    if input.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let file_name = cli.input.to_string_lossy().to_string();

    let source = match read_source(&cli.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", file_name, e);
            process::exit(2);
        }
    };

    if source.trim().is_empty() {
        eprintln!("Error: {} has no code to check", file_name);
        process::exit(2);
    }

    let start = Instant::now();
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &file_name));
            process::exit(1);
        }
    };
    info!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    if cli.tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    if let Err(error) = parse(&tokens) {
        eprint!("{}", format_error(&error, &source, &file_name));
        process::exit(1);
    }
    info!("Validated in {:?}", parse_start.elapsed());
    info!("Total time: {:?}", start.elapsed());

    if !cli.quiet {
        println!("valid");
    }
}
