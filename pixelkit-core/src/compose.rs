//! Glyph compositor
//!
//! Lays a phrase out as one long 5-row strip: every known character's
//! columns followed by a single blank spacer column. Characters missing
//! from the charset are skipped without a trace.

use heapless::Vec;

use crate::glyph::{Charset, GLYPH_HEIGHT};

/// Widest strip a [`ScrollBuffer`] can hold
pub const MAX_SCROLL_COLUMNS: usize = 512;

/// Error composing a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComposeError {
    /// The phrase needs more than [`MAX_SCROLL_COLUMNS`] columns
    Overflow,
}

/// A phrase rendered into glyph columns
///
/// Each column is a row mask: bit `y` set means row `y` is on. The
/// buffer is built once by [`compose`] and never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollBuffer {
    columns: Vec<u8, MAX_SCROLL_COLUMNS>,
}

impl ScrollBuffer {
    /// Number of columns, spacers included
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Check if the buffer has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows (always [`GLYPH_HEIGHT`])
    pub const fn height(&self) -> usize {
        GLYPH_HEIGHT
    }

    /// Cell at `row`, `col`
    ///
    /// Returns `None` when either index is outside the buffer.
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        if row >= GLYPH_HEIGHT {
            return None;
        }
        self.columns.get(col).map(|mask| mask & (1 << row) != 0)
    }

    /// Column `col` as a row mask
    pub fn column(&self, col: usize) -> Option<u8> {
        self.columns.get(col).copied()
    }

    /// Cells of one row, left to right
    ///
    /// Empty for rows outside the buffer.
    pub fn row(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        let columns: &[u8] = if row < GLYPH_HEIGHT { &self.columns[..] } else { &[] };
        columns.iter().map(move |mask| mask & (1 << row) != 0)
    }
}

/// Lay `phrase` out with the glyphs of `charset`
///
/// Width of the result is the sum of the included glyph widths plus one
/// spacer per included glyph, the last one included.
pub fn compose(charset: &Charset, phrase: &str) -> Result<ScrollBuffer, ComposeError> {
    let mut buffer = ScrollBuffer::default();

    for glyph in phrase.chars().filter_map(|c| charset.get(c)) {
        for column in glyph.columns().chain(core::iter::once(0)) {
            if buffer.columns.push(column).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("phrase overflows scroll buffer ({} columns)", MAX_SCROLL_COLUMNS);
                return Err(ComposeError::Overflow);
            }
        }
    }

    Ok(buffer)
}
