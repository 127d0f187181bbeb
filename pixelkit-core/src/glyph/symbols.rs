//! Space and punctuation

use super::Glyph;

pub const SYMBOLS: &[(char, Glyph)] = &[
    (' ', Glyph::new(2, [0b00, 0b00, 0b00, 0b00, 0b00])),
    ('!', Glyph::new(1, [0b1, 0b1, 0b1, 0b0, 0b1])),
    ('.', Glyph::new(1, [0b0, 0b0, 0b0, 0b0, 0b1])),
    (',', Glyph::new(2, [0b00, 0b00, 0b00, 0b01, 0b10])),
    (':', Glyph::new(1, [0b0, 0b1, 0b0, 0b1, 0b0])),
    (';', Glyph::new(2, [0b00, 0b01, 0b00, 0b01, 0b10])),
    ('\'', Glyph::new(1, [0b1, 0b1, 0b0, 0b0, 0b0])),
    ('"', Glyph::new(3, [0b101, 0b101, 0b000, 0b000, 0b000])),
    ('-', Glyph::new(3, [0b000, 0b000, 0b111, 0b000, 0b000])),
    ('+', Glyph::new(3, [0b000, 0b010, 0b111, 0b010, 0b000])),
    ('=', Glyph::new(3, [0b000, 0b111, 0b000, 0b111, 0b000])),
    ('_', Glyph::new(3, [0b000, 0b000, 0b000, 0b000, 0b111])),
    ('/', Glyph::new(3, [0b001, 0b001, 0b010, 0b100, 0b100])),
    ('(', Glyph::new(2, [0b01, 0b10, 0b10, 0b10, 0b01])),
    (')', Glyph::new(2, [0b10, 0b01, 0b01, 0b01, 0b10])),
    ('<', Glyph::new(3, [0b001, 0b010, 0b100, 0b010, 0b001])),
    ('>', Glyph::new(3, [0b100, 0b010, 0b001, 0b010, 0b100])),
    ('*', Glyph::new(3, [0b101, 0b010, 0b111, 0b010, 0b101])),
    ('%', Glyph::new(3, [0b101, 0b001, 0b010, 0b100, 0b101])),
    ('#', Glyph::new(5, [0b01010, 0b11111, 0b01010, 0b11111, 0b01010])),
];
