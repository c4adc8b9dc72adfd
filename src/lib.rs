//! # RETRO BASIC
//!
//! A small line-numbered BASIC in the style of the 8-bit home computers,
//! with a text screen and a pixel surface for graphics.
//!
//! Run the `retro` executable for an interactive session. If you get the
//! following, you have achieved success.
//! ```text
//! READY.
//! █
//! ```
//!
//! The interpreter can also be embedded. It writes to anything that
//! implements [`display::DisplayPort`].
//! ```
//! use retro::display::Canvas;
//! use retro::mach::Runtime;
//!
//! let mut runtime = Runtime::default();
//! let mut canvas = Canvas::default();
//! runtime.process_line("10 PRINT \"HELLO\"", &mut canvas);
//! runtime.process_line("RUN", &mut canvas);
//! assert_eq!(canvas.text()[0], "HELLO");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod display;
pub mod lang;
pub mod mach;
