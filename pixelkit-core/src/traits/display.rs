//! Pixel display trait for the LED grid

use pixelkit_hal::LedWriteError;

use crate::color::Rgb;
use crate::glyph::{Glyph, GLYPH_HEIGHT};

/// Errors that can occur while driving the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Pushing the frame to the LEDs failed
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Frame larger than the LED chain
    BufferOverflow,
    /// Brightness outside 0.0-1.0
    InvalidBrightness,
}

impl From<LedWriteError> for DisplayError {
    fn from(err: LedWriteError) -> Self {
        match err {
            LedWriteError::Transfer => DisplayError::Communication,
            LedWriteError::TooManyPixels => DisplayError::BufferOverflow,
        }
    }
}

/// Framebuffer over the LED grid
///
/// Drawing calls only touch the in-memory frame; nothing reaches the
/// LEDs until [`PixelDisplay::flush`]. Coordinates outside the grid are
/// clipped silently, so `set_pixel` never fails for being off-grid.
pub trait PixelDisplay {
    /// Grid size as (width, height) in pixels
    fn dimensions(&self) -> (u8, u8);

    /// Set one pixel in the frame
    fn set_pixel(&mut self, x: i16, y: i16, color: Rgb) -> Result<(), DisplayError>;

    /// Read one pixel back from the frame
    ///
    /// Returns `None` outside the grid.
    fn pixel(&self, x: i16, y: i16) -> Option<Rgb>;

    /// Set every pixel in the frame
    fn fill(&mut self, color: Rgb) -> Result<(), DisplayError>;

    /// Commit the frame to the LEDs
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Set global brightness, 0.0-1.0
    ///
    /// Displays without dimming ignore it.
    fn set_brightness(&mut self, _brightness: f32) -> Result<(), DisplayError> {
        Ok(())
    }
}

impl<T: PixelDisplay + ?Sized> PixelDisplay for &mut T {
    fn dimensions(&self) -> (u8, u8) {
        T::dimensions(self)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Rgb) -> Result<(), DisplayError> {
        T::set_pixel(self, x, y, color)
    }

    fn pixel(&self, x: i16, y: i16) -> Option<Rgb> {
        T::pixel(self, x, y)
    }

    fn fill(&mut self, color: Rgb) -> Result<(), DisplayError> {
        T::fill(self, color)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        T::flush(self)
    }

    fn set_brightness(&mut self, brightness: f32) -> Result<(), DisplayError> {
        T::set_brightness(self, brightness)
    }
}

/// Helper trait for drawing shapes and glyphs
pub trait PixelDisplayExt: PixelDisplay {
    /// Fill the frame with black
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.fill(Rgb::BLACK)
    }

    /// Horizontal line of `length` pixels starting at (x, y)
    fn hline(&mut self, x: i16, y: i16, length: u8, color: Rgb) -> Result<(), DisplayError> {
        for dx in 0..length as i16 {
            self.set_pixel(x.saturating_add(dx), y, color)?;
        }
        Ok(())
    }

    /// Vertical line of `length` pixels starting at (x, y)
    fn vline(&mut self, x: i16, y: i16, length: u8, color: Rgb) -> Result<(), DisplayError> {
        for dy in 0..length as i16 {
            self.set_pixel(x, y.saturating_add(dy), color)?;
        }
        Ok(())
    }

    /// Line between two points, both ends included (Bresenham)
    fn line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Rgb) -> Result<(), DisplayError> {
        let (x0, y0, x1, y1) = (x0 as i32, y0 as i32, x1 as i32, y1 as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x as i16, y as i16, color)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Rectangle outline with its top-left corner at (x, y)
    fn rect(
        &mut self,
        x: i16,
        y: i16,
        width: u8,
        height: u8,
        color: Rgb,
    ) -> Result<(), DisplayError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        let right = x.saturating_add(width as i16 - 1);
        let bottom = y.saturating_add(height as i16 - 1);
        self.hline(x, y, width, color)?;
        self.hline(x, bottom, width, color)?;
        self.vline(x, y, height, color)?;
        self.vline(right, y, height, color)
    }

    /// Filled rectangle with its top-left corner at (x, y)
    fn fill_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u8,
        height: u8,
        color: Rgb,
    ) -> Result<(), DisplayError> {
        for dy in 0..height as i16 {
            self.hline(x, y.saturating_add(dy), width, color)?;
        }
        Ok(())
    }

    /// Draw the lit cells of a glyph with its top-left corner at (x, y)
    ///
    /// Unlit cells are left untouched.
    fn draw_glyph(
        &mut self,
        x: i16,
        y: i16,
        glyph: &Glyph,
        color: Rgb,
    ) -> Result<(), DisplayError> {
        for gy in 0..GLYPH_HEIGHT {
            for gx in 0..glyph.width() {
                if glyph.is_lit(gx, gy) {
                    let (px, py) = (x.saturating_add(gx as i16), y.saturating_add(gy as i16));
                    self.set_pixel(px, py, color)?;
                }
            }
        }
        Ok(())
    }
}

// Blanket implementation for all PixelDisplay types
impl<T: PixelDisplay + ?Sized> PixelDisplayExt for T {}
