use super::Config;
use ansi_term::Colour;
use mortal::Terminal;
use retro::display::{palette, Canvas, DisplayPort, DEFAULT_GRAPHICS_COLOR};
use std::io;

/// Display port for a real terminal. Text goes straight to the terminal;
/// everything is also mirrored into a [`Canvas`] which supplies cursor
/// position, colors, and the pixel surface.
pub struct TerminalDisplay {
    terminal: Terminal,
    canvas: Canvas,
    out: String,
    color: bool,
    error: Option<io::Error>,
}

impl TerminalDisplay {
    pub fn new(config: &Config) -> io::Result<TerminalDisplay> {
        Ok(TerminalDisplay {
            terminal: Terminal::new()?,
            canvas: Canvas::new(config.columns, config.rows),
            out: String::new(),
            color: !config.no_color,
            error: None,
        })
    }

    pub fn has_output(&self) -> bool {
        !self.out.is_empty()
    }

    /// Writes buffered text. Also reports the first terminal error
    /// since the last flush.
    pub fn flush(&mut self) -> io::Result<()> {
        if !self.out.is_empty() {
            let result = self.terminal.write_str(&self.out);
            self.out.clear();
            self.remember(result);
        }
        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Keeps the mirror in step with a line the host printed or the user typed.
    pub fn mirror_line(&mut self, s: &str) {
        self.canvas.add_str(s);
        self.canvas.add_char('\n');
    }

    /// Draws the pixel surface with half blocks, two pixel rows per line.
    pub fn render_graphics(&mut self) -> io::Result<()> {
        if !self.canvas.take_dirty() {
            return Ok(());
        }
        let (width, height) = (self.canvas.width() as i32, self.canvas.height() as i32);
        let mut s = String::new();
        for y in (0..height).step_by(2) {
            for x in 0..width {
                let top = self.canvas.pixel(x, y).unwrap_or(DEFAULT_GRAPHICS_COLOR);
                let bottom = self.canvas.pixel(x, y + 1).unwrap_or(top);
                if self.color {
                    let fg = rgb(top);
                    let bg = rgb(bottom);
                    s.push_str(&fg.on(bg).paint("\u{2580}").to_string());
                } else {
                    s.push(match (top == DEFAULT_GRAPHICS_COLOR, bottom == DEFAULT_GRAPHICS_COLOR) {
                        (true, true) => ' ',
                        (false, true) => '\u{2580}',
                        (true, false) => '\u{2584}',
                        (false, false) => '\u{2588}',
                    });
                }
            }
            s.push('\n');
        }
        self.terminal.write_str(&s)
    }

    fn remember(&mut self, result: io::Result<()>) {
        if let Err(error) = result {
            if self.error.is_none() {
                self.error = Some(error);
            }
        }
    }

    fn styled(&self, ch: char) -> String {
        if self.color {
            let fg = rgb(self.canvas.text_color());
            let bg = rgb(self.canvas.background_color());
            fg.on(bg).paint(ch.to_string()).to_string()
        } else {
            ch.to_string()
        }
    }

    /// Relative moves from where the mirror says the cursor was.
    fn move_terminal_cursor(&mut self, from: (usize, usize), to: (usize, usize)) {
        let text = std::mem::take(&mut self.out);
        let mut result = self.terminal.write_str(&text);
        if result.is_ok() && to.1 < from.1 {
            result = self.terminal.move_up(from.1 - to.1);
        }
        if result.is_ok() && to.1 > from.1 {
            result = self.terminal.move_down(to.1 - from.1);
        }
        if result.is_ok() {
            result = self.terminal.move_to_first_column();
        }
        if result.is_ok() && to.0 > 0 {
            result = self.terminal.move_right(to.0);
        }
        self.remember(result);
    }
}

fn rgb(index: u8) -> Colour {
    let (r, g, b) = palette::color(index).rgb;
    Colour::RGB(r, g, b)
}

impl DisplayPort for TerminalDisplay {
    fn add_char(&mut self, ch: char) {
        self.canvas.add_char(ch);
        match ch {
            '\n' | '\r' => self.out.push(ch),
            _ => {
                let s = self.styled(ch);
                self.out.push_str(&s);
                if self.canvas.cursor().0 == 0 {
                    self.out.push('\n');
                }
            }
        }
    }

    fn set_text_color(&mut self, color: u8) {
        self.canvas.set_text_color(color);
    }

    fn set_background_color(&mut self, color: u8) {
        self.canvas.set_background_color(color);
    }

    fn clear_screen(&mut self) {
        self.canvas.clear_screen();
        self.out.clear();
        let result = self.terminal.clear_screen();
        self.remember(result);
    }

    fn clear_graphics(&mut self) {
        self.canvas.clear_graphics();
    }

    fn move_cursor_to(&mut self, column: Option<i32>, row: Option<i32>) {
        let from = self.canvas.cursor();
        self.canvas.move_cursor_to(column, row);
        let to = self.canvas.cursor();
        self.move_terminal_cursor(from, to);
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Option<u8>) {
        self.canvas.draw_pixel(x, y, color);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Option<u8>) {
        self.canvas.draw_line(x1, y1, x2, y2, color);
    }

    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, filled: bool, color: Option<u8>) {
        self.canvas.draw_rect(x1, y1, x2, y2, filled, color);
    }

    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, filled: bool, color: Option<u8>) {
        self.canvas.draw_circle(cx, cy, r, filled, color);
    }

    fn flood_fill(&mut self, x: i32, y: i32) {
        self.canvas.flood_fill(x, y);
    }
}
