/*!
## Rust Machine Module

This Rust module stores programs and variables, evaluates
expressions, and executes statements.

*/

pub type Address = usize;

mod eval;
mod frame;
mod function;
mod listing;
mod operation;
mod runtime;
mod stack;
mod statement;
mod val;
mod var;

pub use eval::eval;
pub use frame::LoopFrame;
pub use function::Function;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
