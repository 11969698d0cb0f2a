// 5x5 LED matrix glyphs
//
// Each row is a bit mask, bit 4 is the leftmost column.

use super::indicator::Compass;

pub const SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; SIZE],
}

pub const ARROW_NORTH: Glyph = Glyph::new([
    0b00100, //
    0b01110, //
    0b10101, //
    0b00100, //
    0b00100, //
]);

pub const ARROW_SOUTH: Glyph = Glyph::new([
    0b00100, //
    0b00100, //
    0b10101, //
    0b01110, //
    0b00100, //
]);

pub const ARROW_EAST: Glyph = Glyph::new([
    0b00100, //
    0b00010, //
    0b11111, //
    0b00010, //
    0b00100, //
]);

pub const ARROW_WEST: Glyph = Glyph::new([
    0b00100, //
    0b01000, //
    0b11111, //
    0b01000, //
    0b00100, //
]);

pub const BLOCKED: Glyph = Glyph::new([
    0b10001, //
    0b01010, //
    0b00100, //
    0b01010, //
    0b10001, //
]);

impl Glyph {
    pub const fn new(rows: [u8; SIZE]) -> Self {
        Self { rows }
    }

    pub fn arrow(heading: Compass) -> Self {
        match heading {
            Compass::North => ARROW_NORTH,
            Compass::South => ARROW_SOUTH,
            Compass::East => ARROW_EAST,
            Compass::West => ARROW_WEST,
        }
    }

    /// Whether the LED at column `x`, row `y` is lit
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        x < SIZE && y < SIZE && self.rows[y] & (1 << (SIZE - 1 - x)) != 0
    }

    pub fn rows(&self) -> &[u8; SIZE] {
        &self.rows
    }

    /// Renders the glyph as five lines of `#` (lit) and `.` (dark)
    pub fn render(&self, lit: char, dark: char) -> Vec<String> {
        (0..SIZE)
            .map(|y| {
                (0..SIZE)
                    .map(|x| if self.is_lit(x, y) { lit } else { dark })
                    .collect()
            })
            .collect()
    }
}
