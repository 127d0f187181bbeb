//! Kit configuration
//!
//! Board-agnostic settings for the grid and the scroll animation. The
//! defaults reproduce the stock PixelKit behavior; with the `toml`
//! feature a configuration can be loaded from text (see [`loader`]).

#[cfg(feature = "toml")]
pub mod loader;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::glyph::GLYPH_HEIGHT;
use crate::scroll::{ScrollStyle, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_ORIGIN_ROW};
use crate::GRID_HEIGHT;

/// Stock brightness; the LEDs are painfully bright at full power
pub const DEFAULT_BRIGHTNESS: f32 = 0.03;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Brightness outside 0.0-1.0
    BrightnessOutOfRange,
    /// Scroll window would extend below the grid
    OriginRowOutOfRange,
    /// Input could not be parsed
    Parse,
}

/// Complete kit configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KitConfig {
    pub display: DisplayConfig,
    pub scroll: ScrollConfig,
}

impl KitConfig {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()?;
        self.scroll.validate()
    }
}

/// LED grid settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Global brightness, 0.0-1.0
    pub brightness: f32,
    /// LED chain snakes back and forth (serpentine) instead of
    /// restarting at the left of every row
    pub alternating: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            alternating: false,
        }
    }
}

impl DisplayConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.brightness) {
            #[cfg(feature = "defmt")]
            defmt::warn!("brightness {} out of range", self.brightness);
            return Err(ConfigError::BrightnessOutOfRange);
        }
        Ok(())
    }
}

/// Scrolling text settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollConfig {
    /// Text color as `0xRRGGBB`
    pub color: u32,
    /// Background color as `0xRRGGBB`
    pub background: u32,
    /// Delay after each frame
    pub frame_interval_ms: u32,
    /// Grid row of the top glyph row
    pub origin_row: u8,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE.to_hex(),
            background: Rgb::BLACK.to_hex(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            origin_row: DEFAULT_ORIGIN_ROW,
        }
    }
}

impl ScrollConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.origin_row as usize + GLYPH_HEIGHT > GRID_HEIGHT as usize {
            #[cfg(feature = "defmt")]
            defmt::warn!("scroll origin row {} out of range", self.origin_row);
            return Err(ConfigError::OriginRowOutOfRange);
        }
        Ok(())
    }

    /// Style for the scroll renderer
    pub fn style(&self) -> ScrollStyle {
        ScrollStyle {
            color: Rgb::from_hex(self.color),
            background: Rgb::from_hex(self.background),
            frame_interval_ms: self.frame_interval_ms,
            origin_row: self.origin_row,
        }
    }
}
