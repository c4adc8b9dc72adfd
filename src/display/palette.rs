//! The sixteen colors selectable with `COLOR`, in C64 order.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

const PALETTE: [Color; 16] = [
    Color { name: "BLACK", rgb: (0x00, 0x00, 0x00) },
    Color { name: "WHITE", rgb: (0xFF, 0xFF, 0xFF) },
    Color { name: "RED", rgb: (0x88, 0x00, 0x00) },
    Color { name: "CYAN", rgb: (0xAA, 0xFF, 0xEE) },
    Color { name: "PURPLE", rgb: (0xCC, 0x44, 0xCC) },
    Color { name: "GREEN", rgb: (0x00, 0xCC, 0x55) },
    Color { name: "BLUE", rgb: (0x00, 0x00, 0xAA) },
    Color { name: "YELLOW", rgb: (0xEE, 0xEE, 0x77) },
    Color { name: "ORANGE", rgb: (0xDD, 0x88, 0x55) },
    Color { name: "BROWN", rgb: (0x66, 0x44, 0x00) },
    Color { name: "LIGHT RED", rgb: (0xFF, 0x77, 0x77) },
    Color { name: "DARK GREY", rgb: (0x33, 0x33, 0x33) },
    Color { name: "GREY", rgb: (0x77, 0x77, 0x77) },
    Color { name: "LIGHT GREEN", rgb: (0xAA, 0xFF, 0x66) },
    Color { name: "LIGHT BLUE", rgb: (0x00, 0x88, 0xFF) },
    Color { name: "LIGHT GREY", rgb: (0xBB, 0xBB, 0xBB) },
];

/// Looks up a palette index. Indexes above 15 wrap.
pub fn color(index: u8) -> Color {
    PALETTE[(index & 0x0F) as usize]
}

pub fn name(index: u8) -> &'static str {
    color(index).name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(name(crate::display::DEFAULT_TEXT_COLOR), "LIGHT BLUE");
        assert_eq!(name(crate::display::DEFAULT_BACKGROUND_COLOR), "BLACK");
        assert_eq!(color(15).rgb, (0xBB, 0xBB, 0xBB));
        assert_eq!(name(16), "BLACK");
    }
}
