use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: u8,
    pub bg: u8,
}

/// ## In-memory display
///
/// A text grid plus a pixel grid of `columns * CHAR_WIDTH` by
/// `rows * CHAR_HEIGHT`. Graphics sit under the text.

#[derive(Debug, Clone)]
pub struct Canvas {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    column: usize,
    row: usize,
    text_color: u8,
    background_color: u8,
    pixel_color: u8,
    dirty: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}

impl Canvas {
    pub fn new(columns: usize, rows: usize) -> Canvas {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let width = columns * CHAR_WIDTH;
        let height = rows * CHAR_HEIGHT;
        Canvas {
            columns,
            rows,
            cells: vec![Canvas::blank(DEFAULT_TEXT_COLOR, DEFAULT_BACKGROUND_COLOR); columns * rows],
            width,
            height,
            pixels: vec![DEFAULT_GRAPHICS_COLOR; width * height],
            column: 0,
            row: 0,
            text_color: DEFAULT_TEXT_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
            pixel_color: DEFAULT_TEXT_COLOR,
            dirty: false,
        }
    }

    fn blank(fg: u8, bg: u8) -> Cell {
        Cell { ch: ' ', fg, bg }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Column and row of the text cursor.
    pub fn cursor(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    pub fn text_color(&self) -> u8 {
        self.text_color
    }

    pub fn background_color(&self) -> u8 {
        self.background_color
    }

    pub fn pixel_color(&self) -> u8 {
        self.pixel_color
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        if column < self.columns && row < self.rows {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Every row of the text grid with trailing blanks trimmed.
    pub fn text(&self) -> Vec<String> {
        self.cells
            .chunks(self.columns)
            .map(|row| {
                let s: String = row.iter().map(|cell| cell.ch).collect();
                s.trim_end().to_string()
            })
            .collect()
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Reports whether graphics changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            None
        } else {
            Some(y as usize * self.width + x as usize)
        }
    }

    fn set(&mut self, x: i32, y: i32, color: u8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
            self.dirty = true;
        }
    }

    fn hline(&mut self, x1: i64, x2: i64, y: i64, color: u8) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let min = x1.min(x2).max(0);
        let max = x1.max(x2).min(self.width as i64 - 1);
        for x in min..=max {
            self.set(x as i32, y as i32, color);
        }
    }

    fn newline(&mut self) {
        self.column = 0;
        self.row += 1;
        if self.row >= self.rows {
            self.cells.drain(..self.columns);
            let blank = Canvas::blank(self.text_color, self.background_color);
            self.cells.extend(std::iter::repeat(blank).take(self.columns));
            self.row = self.rows - 1;
        }
    }
}

impl DisplayPort for Canvas {
    fn add_char(&mut self, ch: char) {
        match ch {
            '\n' => self.newline(),
            '\r' => self.column = 0,
            _ => {
                let i = self.row * self.columns + self.column;
                self.cells[i] = Cell {
                    ch,
                    fg: self.text_color,
                    bg: self.background_color,
                };
                self.column += 1;
                if self.column >= self.columns {
                    self.newline();
                }
            }
        }
    }

    fn set_text_color(&mut self, color: u8) {
        let color = if color > 15 { 0 } else { color };
        self.text_color = color;
        self.pixel_color = color;
    }

    fn set_background_color(&mut self, color: u8) {
        self.background_color = if color > 15 { 15 } else { color };
    }

    fn clear_screen(&mut self) {
        let blank = Canvas::blank(self.text_color, self.background_color);
        for cell in self.cells.iter_mut() {
            *cell = blank;
        }
        self.column = 0;
        self.row = 0;
    }

    fn clear_graphics(&mut self) {
        for pixel in self.pixels.iter_mut() {
            *pixel = DEFAULT_GRAPHICS_COLOR;
        }
        self.dirty = true;
    }

    fn move_cursor_to(&mut self, column: Option<i32>, row: Option<i32>) {
        if let Some(column) = column {
            self.column = column.max(0).min(self.columns as i32 - 1) as usize;
        }
        if let Some(row) = row {
            self.row = row.max(0).min(self.rows as i32 - 1) as usize;
        }
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Option<u8>) {
        let color = color.unwrap_or(self.pixel_color);
        self.set(x, y, color);
    }

    /// Bresenham. Drawing stops at the first point off the surface.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Option<u8>) {
        let color = color.unwrap_or(self.pixel_color);
        let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                break;
            }
            self.set(x as i32, y as i32, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, filled: bool, color: Option<u8>) {
        let color = color.unwrap_or(self.pixel_color);
        let min_x = x1.min(x2).max(0);
        let max_x = x1.max(x2).min(self.width as i32 - 1);
        let min_y = y1.min(y2).max(0);
        let max_y = y1.max(y2).min(self.height as i32 - 1);
        if min_x > max_x || min_y > max_y {
            return;
        }
        if filled {
            for y in min_y..=max_y {
                self.hline(min_x as i64, max_x as i64, y as i64, color);
            }
        } else {
            self.hline(min_x as i64, max_x as i64, min_y as i64, color);
            self.hline(min_x as i64, max_x as i64, max_y as i64, color);
            for y in min_y..=max_y {
                self.set(min_x, y, color);
                self.set(max_x, y, color);
            }
        }
    }

    /// Walks only the surface rows the circle covers. An outline row spans
    /// from its own half width in to the half width of the next row out.
    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, filled: bool, color: Option<u8>) {
        let color = color.unwrap_or(self.pixel_color);
        if r < 0 {
            return;
        }
        let (cx, cy, r) = (cx as i64, cy as i64, r as i64);
        let (w, h) = (self.width as i64, self.height as i64);
        if cx + r < 0 || cy + r < 0 || cx - r >= w || cy - r >= h {
            return;
        }
        let half = |dy: i64| if dy > r { -1 } else { isqrt(r * r - dy * dy) };
        for y in (cy - r).max(0)..=(cy + r).min(h - 1) {
            let dy = (y - cy).abs();
            let outer = half(dy);
            if filled {
                self.hline(cx - outer, cx + outer, y, color);
            } else {
                let inner = (half(dy + 1) + 1).min(outer);
                self.hline(cx - outer, cx - inner, y, color);
                self.hline(cx + inner, cx + outer, y, color);
            }
        }
    }

    /// Replaces the 4-connected region of the starting pixel's color.
    fn flood_fill(&mut self, x: i32, y: i32) {
        let color = self.pixel_color;
        let target = match self.pixel(x, y) {
            Some(target) if target != color => target,
            _ => return,
        };
        let mut stack = vec![(x, y)];
        while let Some((x, y)) = stack.pop() {
            match self.pixel(x, y) {
                Some(c) if c == target => {}
                _ => continue,
            }
            self.set(x, y, color);
            stack.push((x + 1, y));
            stack.push((x - 1, y));
            stack.push((x, y + 1));
            stack.push((x, y - 1));
        }
    }
}

fn isqrt(n: i64) -> i64 {
    let mut x = (n as f64).sqrt() as i64;
    while x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}
