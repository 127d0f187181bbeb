//! Upper-case letters
//!
//! Most letters are 3 columns wide; M, N, Q and W need more room.

use super::Glyph;

pub const LETTERS: &[(char, Glyph)] = &[
    ('A', Glyph::new(3, [0b010, 0b101, 0b111, 0b101, 0b101])),
    ('B', Glyph::new(3, [0b110, 0b101, 0b110, 0b101, 0b110])),
    ('C', Glyph::new(3, [0b011, 0b100, 0b100, 0b100, 0b011])),
    ('D', Glyph::new(3, [0b110, 0b101, 0b101, 0b101, 0b110])),
    ('E', Glyph::new(3, [0b111, 0b100, 0b110, 0b100, 0b111])),
    ('F', Glyph::new(3, [0b111, 0b100, 0b110, 0b100, 0b100])),
    ('G', Glyph::new(3, [0b011, 0b100, 0b101, 0b101, 0b011])),
    ('H', Glyph::new(3, [0b101, 0b101, 0b111, 0b101, 0b101])),
    ('I', Glyph::new(3, [0b111, 0b010, 0b010, 0b010, 0b111])),
    ('J', Glyph::new(3, [0b001, 0b001, 0b001, 0b101, 0b010])),
    ('K', Glyph::new(3, [0b101, 0b101, 0b110, 0b101, 0b101])),
    ('L', Glyph::new(3, [0b100, 0b100, 0b100, 0b100, 0b111])),
    ('M', Glyph::new(5, [0b10001, 0b11011, 0b10101, 0b10001, 0b10001])),
    ('N', Glyph::new(4, [0b1001, 0b1101, 0b1011, 0b1001, 0b1001])),
    ('O', Glyph::new(3, [0b010, 0b101, 0b101, 0b101, 0b010])),
    ('P', Glyph::new(3, [0b110, 0b101, 0b110, 0b100, 0b100])),
    ('Q', Glyph::new(4, [0b0110, 0b1001, 0b1001, 0b1011, 0b0111])),
    ('R', Glyph::new(3, [0b110, 0b101, 0b110, 0b101, 0b101])),
    ('S', Glyph::new(3, [0b011, 0b100, 0b010, 0b001, 0b110])),
    ('T', Glyph::new(3, [0b111, 0b010, 0b010, 0b010, 0b010])),
    ('U', Glyph::new(3, [0b101, 0b101, 0b101, 0b101, 0b111])),
    ('V', Glyph::new(3, [0b101, 0b101, 0b101, 0b101, 0b010])),
    ('W', Glyph::new(5, [0b10001, 0b10001, 0b10101, 0b11011, 0b10001])),
    ('X', Glyph::new(3, [0b101, 0b101, 0b010, 0b101, 0b101])),
    ('Y', Glyph::new(3, [0b101, 0b101, 0b010, 0b010, 0b010])),
    ('Z', Glyph::new(3, [0b111, 0b001, 0b010, 0b100, 0b111])),
];
