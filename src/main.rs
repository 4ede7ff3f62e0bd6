//! # BASIC
//!
//! Runs a line-numbered BASIC program from a file.
//!

use clap::Parser;
use std::path::PathBuf;

mod term;

#[derive(Parser, Debug)]
#[command(name = "basic", version, about = "Run a line-numbered BASIC program", long_about = None)]
struct Cli {
    /// Program file, one numbered statement per line.
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    term::init_tracing();
    std::process::exit(term::main(&cli.file));
}
