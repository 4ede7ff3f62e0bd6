#![allow(dead_code)]

use basic::lang::Error;
use basic::mach::{Runtime, Scripted};

pub fn runtime() -> Runtime<Scripted> {
    Runtime::with_console(Scripted::default())
}

/// Output lines of a program run, or the error that stopped it.
pub fn run(program: &str) -> Result<Vec<String>, Error> {
    let mut r = runtime();
    r.run(program)?;
    Ok(r.output().to_vec())
}

/// Everything a terminal would show, errors included.
pub fn exec(program: &str) -> String {
    exec_with_input(program, &[])
}

pub fn exec_with_input(program: &str, input: &[&str]) -> String {
    let mut r = Runtime::with_console(Scripted::new(input.iter().copied()));
    let result = r.run(program);
    let mut s = r.console().transcript().to_string();
    if let Err(error) = result {
        s.push_str(&format!("{}\n", error));
    }
    s
}
