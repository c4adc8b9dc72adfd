//! # RETRO BASIC
//!
//! Interactive terminal for the line-numbered BASIC in the `retro` library.
//!

mod term;

fn main() {
    term::main();
}
