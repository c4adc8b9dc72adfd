/*!
# Rust Language Module

This Rust module splits input lines, recognizes reserved words,
and parses statements.

*/

pub type LineNumber = Option<u16>;

/// Largest line number a program may use.
pub const MAX_LINE_NUMBER: u16 = 65529;

/// Longest accepted input line, in bytes.
pub const MAX_LINE_LEN: usize = 255;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{is_ident, is_quoted, lex, split_top_level};
pub use line::Line;
pub use parse::parse;
pub use token::{Operator, Relation, Word};

pub mod ast;

#[cfg(test)]
mod tests;
