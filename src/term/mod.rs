extern crate ansi_term;
use ansi_term::{Colour, Style};
use basic::mach::Runtime;
use std::io::IsTerminal;
use std::path::Path;

/// Runs the program in `path` on the process terminal and returns the
/// exit code.
pub fn main(path: &Path) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            report(&format!("{}: {}", path.display(), error));
            return 1;
        }
    };
    let mut runtime = Runtime::default();
    match runtime.run(&source) {
        Ok(()) => 0,
        Err(error) => {
            report(&error.to_string());
            1
        }
    }
}

/// Diagnostics go to standard error so standard output stays program output.
/// Nothing is installed unless `RUST_LOG` is set.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    }
}

fn report(message: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{}", Style::new().bold().fg(Colour::Red).paint(message));
    } else {
        eprintln!("{}", message);
    }
}
