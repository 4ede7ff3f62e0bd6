//! # Line BASIC
//!
//! A small interpreter for line-numbered BASIC programs.
//!
//! Run a program file with `basic <FILE>`. Every line of the file starts
//! with a line number followed by one statement. Lines run in line number
//! order no matter how they appear in the file.
//! ```text
//! 10 LET N = 5
//! 20 LET F = 1
//! 30 FOR I = 1 TO N
//! 40 LET F = F * I
//! 50 NEXT I
//! 60 PRINT "FACTORIAL OF"; N; "IS"; F
//! ```
//!
//! Set `RUST_LOG=basic=trace` to watch every statement as it executes.

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod lang;
pub mod mach;
