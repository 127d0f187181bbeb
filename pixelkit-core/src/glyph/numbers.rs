//! Digits

use super::Glyph;

pub const NUMBERS: &[(char, Glyph)] = &[
    ('0', Glyph::new(3, [0b111, 0b101, 0b101, 0b101, 0b111])),
    ('1', Glyph::new(3, [0b010, 0b110, 0b010, 0b010, 0b111])),
    ('2', Glyph::new(3, [0b111, 0b001, 0b111, 0b100, 0b111])),
    ('3', Glyph::new(3, [0b111, 0b001, 0b011, 0b001, 0b111])),
    ('4', Glyph::new(3, [0b101, 0b101, 0b111, 0b001, 0b001])),
    ('5', Glyph::new(3, [0b111, 0b100, 0b111, 0b001, 0b111])),
    ('6', Glyph::new(3, [0b111, 0b100, 0b111, 0b101, 0b111])),
    ('7', Glyph::new(3, [0b111, 0b001, 0b010, 0b010, 0b010])),
    ('8', Glyph::new(3, [0b111, 0b101, 0b111, 0b101, 0b111])),
    ('9', Glyph::new(3, [0b111, 0b101, 0b111, 0b001, 0b111])),
];
