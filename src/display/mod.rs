/*!
# Rust Display Module

The interpreter writes all of its output through a [`DisplayPort`].
It never reads anything back. [`Canvas`] is an in-memory surface with
a text grid and a pixel grid. [`Transcript`] records every call.

*/

mod canvas;
pub mod palette;
mod transcript;

pub use canvas::Canvas;
pub use transcript::{Call, Transcript};

/// Text grid width in characters.
pub const DEFAULT_COLUMNS: usize = 40;
/// Text grid height in characters.
pub const DEFAULT_ROWS: usize = 20;
/// Pixels per character cell, horizontally.
pub const CHAR_WIDTH: usize = 6;
/// Pixels per character cell, vertically.
pub const CHAR_HEIGHT: usize = 8;

pub const DEFAULT_TEXT_COLOR: u8 = 14;
pub const DEFAULT_BACKGROUND_COLOR: u8 = 0;
pub const DEFAULT_GRAPHICS_COLOR: u8 = 15;

/// ## Output surface
///
/// Colors are palette indexes 0 to 15. A graphics color of `None`
/// means the port's current pixel color, which follows the text color.
pub trait DisplayPort {
    fn add_char(&mut self, ch: char);
    fn set_text_color(&mut self, color: u8);
    fn set_background_color(&mut self, color: u8);
    fn clear_screen(&mut self);
    fn clear_graphics(&mut self);
    /// Zero-based. `None` leaves that axis unchanged.
    fn move_cursor_to(&mut self, column: Option<i32>, row: Option<i32>);
    fn draw_pixel(&mut self, x: i32, y: i32, color: Option<u8>);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Option<u8>);
    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, filled: bool, color: Option<u8>);
    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, filled: bool, color: Option<u8>);
    fn flood_fill(&mut self, x: i32, y: i32);

    fn add_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.add_char(ch);
        }
    }
}
