use super::DisplayPort;

/// One recorded port call. Characters are not recorded here; they
/// accumulate in [`Transcript::text`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    TextColor(u8),
    BackgroundColor(u8),
    ClearScreen,
    ClearGraphics,
    MoveCursor(Option<i32>, Option<i32>),
    Pixel(i32, i32, Option<u8>),
    Line(i32, i32, i32, i32, Option<u8>),
    Rect(i32, i32, i32, i32, bool, Option<u8>),
    Circle(i32, i32, i32, bool, Option<u8>),
    Fill(i32, i32),
}

/// Write-only port that remembers everything it is told.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub text: String,
    pub calls: Vec<Call>,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }
}

impl DisplayPort for Transcript {
    fn add_char(&mut self, ch: char) {
        self.text.push(ch);
    }
    fn set_text_color(&mut self, color: u8) {
        self.calls.push(Call::TextColor(color));
    }
    fn set_background_color(&mut self, color: u8) {
        self.calls.push(Call::BackgroundColor(color));
    }
    fn clear_screen(&mut self) {
        self.calls.push(Call::ClearScreen);
    }
    fn clear_graphics(&mut self) {
        self.calls.push(Call::ClearGraphics);
    }
    fn move_cursor_to(&mut self, column: Option<i32>, row: Option<i32>) {
        self.calls.push(Call::MoveCursor(column, row));
    }
    fn draw_pixel(&mut self, x: i32, y: i32, color: Option<u8>) {
        self.calls.push(Call::Pixel(x, y, color));
    }
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Option<u8>) {
        self.calls.push(Call::Line(x1, y1, x2, y2, color));
    }
    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, filled: bool, color: Option<u8>) {
        self.calls.push(Call::Rect(x1, y1, x2, y2, filled, color));
    }
    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, filled: bool, color: Option<u8>) {
        self.calls.push(Call::Circle(cx, cy, r, filled, color));
    }
    fn flood_fill(&mut self, x: i32, y: i32) {
        self.calls.push(Call::Fill(x, y));
    }
}
