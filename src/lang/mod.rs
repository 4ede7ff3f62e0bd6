/*!
# Rust Language Module

This Rust module splits BASIC program text into numbered lines
and defines the errors every layer reports.

*/

#[macro_use]
mod error;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;

/// Line numbers are whatever the leading integer of a source line parses to.
pub type LineNumber = i64;
