//! Addressable LED chain abstraction
//!
//! WS2812-style chains are written as a whole: every pixel of the frame
//! is shifted out in chain order on each write.

/// Error returned when a frame could not be pushed to the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedWriteError {
    /// The data transfer (RMT, PIO, SPI, ...) failed
    Transfer,
    /// More pixels than the chain holds
    TooManyPixels,
}

/// Addressable LED chain
pub trait LedStrip {
    /// Number of LEDs on the chain
    fn len(&self) -> usize;

    /// Check if the chain has no LEDs
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write `[r, g, b]` triples in chain order
    fn write(&mut self, pixels: &[[u8; 3]]) -> Result<(), LedWriteError>;
}
