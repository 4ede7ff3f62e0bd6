/*!
## Rust Machine Module

This Rust module evaluates and executes BASIC statements.

*/

mod console;
mod expression;
mod listing;
mod operation;
mod runtime;
mod stack;
mod val;
mod var;

pub use console::Console;
pub use console::Scripted;
pub use console::Stdio;
pub use expression::Expression;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Flow;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
