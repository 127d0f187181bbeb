//! Glyphs and the character set
//!
//! A glyph is a 5-row bitmap of variable width. Each row is stored as a
//! bitmask where the leftmost column is the highest used bit:
//!
//! ```text
//! 'A' (width 3)   rows
//!   .#.           0b010
//!   #.#           0b101
//!   ###           0b111
//!   #.#           0b101
//!   #.#           0b101
//! ```
//!
//! The built-in [`Charset`] is the union of the letter, number and symbol
//! tables, merged in that order.

mod letters;
mod numbers;
mod symbols;

use heapless::FnvIndexMap;

pub use letters::LETTERS;
pub use numbers::NUMBERS;
pub use symbols::SYMBOLS;

/// Rows in every glyph
pub const GLYPH_HEIGHT: usize = 5;

/// Widest glyph a row bitmask can hold
pub const MAX_GLYPH_WIDTH: u8 = 8;

/// Maximum number of characters in a charset (power of two for the map)
pub const CHARSET_CAPACITY: usize = 128;

const _: () = assert!(LETTERS.len() + NUMBERS.len() + SYMBOLS.len() <= CHARSET_CAPACITY);

/// Fixed-height, variable-width character bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    width: u8,
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// Create a glyph from row bitmasks
    ///
    /// Bits at or above `width` are ignored.
    ///
    /// # Panics
    ///
    /// If `width` is zero or larger than [`MAX_GLYPH_WIDTH`]. Glyph tables
    /// are `const`, so this is caught at compile time.
    pub const fn new(width: u8, rows: [u8; GLYPH_HEIGHT]) -> Self {
        assert!(width > 0 && width <= MAX_GLYPH_WIDTH);
        Self { width, rows }
    }

    /// Number of columns
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Row bitmasks, leftmost column in the highest used bit
    pub const fn rows(&self) -> [u8; GLYPH_HEIGHT] {
        self.rows
    }

    /// Check if the cell at column `x`, row `y` is on
    ///
    /// Cells outside the glyph are off.
    pub fn is_lit(&self, x: u8, y: usize) -> bool {
        if x >= self.width || y >= GLYPH_HEIGHT {
            return false;
        }
        self.rows[y] & (1 << (self.width - 1 - x)) != 0
    }

    /// Column `x` as a row mask (bit `y` set when row `y` is on)
    pub fn column(&self, x: u8) -> Option<u8> {
        if x >= self.width {
            return None;
        }
        let mut mask = 0;
        for y in 0..GLYPH_HEIGHT {
            if self.is_lit(x, y) {
                mask |= 1 << y;
            }
        }
        Some(mask)
    }

    /// Iterate over the columns as row masks, left to right
    pub fn columns(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.width).filter_map(move |x| self.column(x))
    }
}

/// Error adding glyphs to a charset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharsetError {
    /// The charset already holds [`CHARSET_CAPACITY`] characters
    Full,
}

/// Mapping from character to glyph
///
/// Keys are unique. Adding a glyph for a key that is already present
/// replaces it (last write wins); [`Charset::merge`] reports how many
/// keys were replaced so collisions between tables can be caught.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    glyphs: FnvIndexMap<char, Glyph, CHARSET_CAPACITY>,
}

impl Default for Charset {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Charset {
    /// Create an empty charset
    pub fn new() -> Self {
        Self {
            glyphs: FnvIndexMap::new(),
        }
    }

    /// Letters, numbers and symbols, merged in that order
    pub fn builtin() -> Self {
        let mut charset = Self::new();
        for table in [LETTERS, NUMBERS, SYMBOLS] {
            // Capacity is checked at compile time above
            let _ = charset.merge(table);
        }
        charset
    }

    /// Add or replace one glyph, returning the replaced glyph
    pub fn insert(&mut self, key: char, glyph: Glyph) -> Result<Option<Glyph>, CharsetError> {
        self.glyphs.insert(key, glyph).map_err(|_| CharsetError::Full)
    }

    /// Add every entry of `table` in order
    ///
    /// Returns the number of keys that replaced an existing glyph.
    pub fn merge(&mut self, table: &[(char, Glyph)]) -> Result<usize, CharsetError> {
        let mut shadowed = 0;
        for &(key, glyph) in table {
            if self.insert(key, glyph)?.is_some() {
                #[cfg(feature = "defmt")]
                defmt::warn!("glyph for {} replaced", key);
                shadowed += 1;
            }
        }
        Ok(shadowed)
    }

    /// Look up the glyph for a character
    pub fn get(&self, key: char) -> Option<&Glyph> {
        self.glyphs.get(&key)
    }

    /// Check if a character has a glyph
    pub fn contains(&self, key: char) -> bool {
        self.glyphs.contains_key(&key)
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if the charset is empty
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over all (character, glyph) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (char, &Glyph)> + '_ {
        self.glyphs.iter().map(|(key, glyph)| (*key, glyph))
    }
}
