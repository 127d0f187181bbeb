//! 16x8 LED matrix
//!
//! Keeps the working frame in RAM. Drawing only touches the frame;
//! [`PixelDisplay::flush`] scales every pixel by the global brightness
//! and shifts the whole frame out to the LED chain.
//!
//! Chain order is row-major from the top-left corner. Boards wired as a
//! serpentine use [`Layout::Alternating`]: odd rows run right to left.

use pixelkit_core::color::Rgb;
use pixelkit_core::config::{DisplayConfig, DEFAULT_BRIGHTNESS};
use pixelkit_core::traits::{DisplayError, PixelDisplay};
use pixelkit_core::{GRID_HEIGHT, GRID_WIDTH};
use pixelkit_hal::LedStrip;

const WIDTH: usize = GRID_WIDTH as usize;
const HEIGHT: usize = GRID_HEIGHT as usize;

/// Number of LEDs in the matrix
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// How grid coordinates map onto the LED chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layout {
    /// Every row runs left to right
    #[default]
    RowMajor,
    /// Even rows run left to right, odd rows right to left
    Alternating,
}

impl Layout {
    /// Chain index of the pixel at (x, y); both must be on the grid
    pub fn index(self, x: usize, y: usize) -> usize {
        match self {
            Layout::RowMajor => y * WIDTH + x,
            Layout::Alternating if y % 2 == 1 => y * WIDTH + (WIDTH - 1 - x),
            Layout::Alternating => y * WIDTH + x,
        }
    }
}

/// Framebuffer over an addressable LED chain
pub struct PixelMatrix<S> {
    strip: S,
    frame: [[Rgb; WIDTH]; HEIGHT],
    brightness: f32,
    layout: Layout,
}

impl<S: LedStrip> PixelMatrix<S> {
    /// Create a blank row-major matrix at the default brightness
    pub fn new(strip: S) -> Self {
        Self::with_layout(strip, Layout::RowMajor)
    }

    pub fn with_layout(strip: S, layout: Layout) -> Self {
        Self {
            strip,
            frame: [[Rgb::BLACK; WIDTH]; HEIGHT],
            brightness: DEFAULT_BRIGHTNESS,
            layout,
        }
    }

    /// Create a matrix from the display section of the kit configuration
    pub fn from_config(strip: S, config: &DisplayConfig) -> Result<Self, DisplayError> {
        let layout = if config.alternating {
            Layout::Alternating
        } else {
            Layout::RowMajor
        };
        let mut matrix = Self::with_layout(strip, layout);
        matrix.set_brightness(config.brightness)?;
        Ok(matrix)
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    pub fn release(self) -> S {
        self.strip
    }

    fn cell(x: i16, y: i16) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < WIDTH && y < HEIGHT).then_some((x, y))
    }
}

impl<S: LedStrip> PixelDisplay for PixelMatrix<S> {
    fn dimensions(&self) -> (u8, u8) {
        (GRID_WIDTH, GRID_HEIGHT)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Rgb) -> Result<(), DisplayError> {
        if let Some((x, y)) = Self::cell(x, y) {
            self.frame[y][x] = color;
        }
        Ok(())
    }

    fn pixel(&self, x: i16, y: i16) -> Option<Rgb> {
        Self::cell(x, y).map(|(x, y)| self.frame[y][x])
    }

    fn fill(&mut self, color: Rgb) -> Result<(), DisplayError> {
        self.frame = [[color; WIDTH]; HEIGHT];
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.strip.len() < PIXEL_COUNT {
            #[cfg(feature = "defmt")]
            defmt::warn!("LED chain has {} pixels, need {}", self.strip.len(), PIXEL_COUNT);
            return Err(DisplayError::BufferOverflow);
        }

        let mut out = [[0u8; 3]; PIXEL_COUNT];
        for (y, row) in self.frame.iter().enumerate() {
            for (x, color) in row.iter().enumerate() {
                out[self.layout.index(x, y)] = color.scaled(self.brightness).to_array();
            }
        }

        self.strip.write(&out)?;
        Ok(())
    }

    fn set_brightness(&mut self, brightness: f32) -> Result<(), DisplayError> {
        if !(0.0..=1.0).contains(&brightness) {
            return Err(DisplayError::InvalidBrightness);
        }
        self.brightness = brightness;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use pixelkit_core::traits::PixelDisplayExt;
    use pixelkit_hal::LedWriteError;

    /// Chain that records every written frame
    struct MockStrip {
        len: usize,
        writes: Vec<Vec<[u8; 3]>>,
        fail: bool,
    }

    impl MockStrip {
        fn new(len: usize) -> Self {
            Self {
                len,
                writes: Vec::new(),
                fail: false,
            }
        }

        fn last(&self) -> &[[u8; 3]] {
            self.writes.last().map(Vec::as_slice).unwrap_or(&[])
        }
    }

    impl LedStrip for MockStrip {
        fn len(&self) -> usize {
            self.len
        }

        fn write(&mut self, pixels: &[[u8; 3]]) -> Result<(), LedWriteError> {
            if self.fail {
                return Err(LedWriteError::Transfer);
            }
            if pixels.len() > self.len {
                return Err(LedWriteError::TooManyPixels);
            }
            self.writes.push(pixels.to_vec());
            Ok(())
        }
    }

    fn full_brightness(layout: Layout) -> PixelMatrix<MockStrip> {
        let mut matrix = PixelMatrix::with_layout(MockStrip::new(PIXEL_COUNT), layout);
        matrix.set_brightness(1.0).unwrap();
        matrix
    }

    #[test]
    fn test_drawing_waits_for_flush() {
        let mut matrix = full_brightness(Layout::RowMajor);
        matrix.set_pixel(3, 2, Rgb::RED).unwrap();
        assert!(matrix.strip().writes.is_empty());

        matrix.flush().unwrap();
        assert_eq!(matrix.strip().writes.len(), 1);
        assert_eq!(matrix.strip().last()[2 * 16 + 3], [255, 0, 0]);
    }

    #[test]
    fn test_row_major_index() {
        assert_eq!(Layout::RowMajor.index(0, 0), 0);
        assert_eq!(Layout::RowMajor.index(15, 0), 15);
        assert_eq!(Layout::RowMajor.index(0, 1), 16);
        assert_eq!(Layout::RowMajor.index(15, 7), 127);
    }

    #[test]
    fn test_alternating_index() {
        assert_eq!(Layout::Alternating.index(0, 0), 0);
        assert_eq!(Layout::Alternating.index(0, 1), 31);
        assert_eq!(Layout::Alternating.index(15, 1), 16);
        assert_eq!(Layout::Alternating.index(4, 2), 36);
    }

    #[test]
    fn test_alternating_flush() {
        let mut matrix = full_brightness(Layout::Alternating);
        matrix.set_pixel(0, 1, Rgb::GREEN).unwrap();
        matrix.flush().unwrap();
        assert_eq!(matrix.strip().last()[31], [0, 255, 0]);
        assert_eq!(matrix.strip().last()[16], [0, 0, 0]);
    }

    #[test]
    fn test_brightness_scales_output_only() {
        let mut matrix = PixelMatrix::new(MockStrip::new(PIXEL_COUNT));
        assert_eq!(matrix.brightness(), DEFAULT_BRIGHTNESS);

        matrix.set_brightness(0.5).unwrap();
        matrix.fill(Rgb::WHITE).unwrap();
        matrix.flush().unwrap();

        assert!(matrix.strip().last().iter().all(|p| *p == [127, 127, 127]));
        assert_eq!(matrix.pixel(0, 0), Some(Rgb::WHITE));
    }

    #[test]
    fn test_brightness_range() {
        let mut matrix = PixelMatrix::new(MockStrip::new(PIXEL_COUNT));
        assert_eq!(matrix.set_brightness(1.2), Err(DisplayError::InvalidBrightness));
        assert!(matrix.set_brightness(-0.01).is_err());
        assert_eq!(matrix.brightness(), DEFAULT_BRIGHTNESS);
    }

    #[test]
    fn test_off_grid_pixels_clip() {
        let mut matrix = full_brightness(Layout::RowMajor);
        matrix.set_pixel(-1, 0, Rgb::RED).unwrap();
        matrix.set_pixel(16, 0, Rgb::RED).unwrap();
        matrix.set_pixel(0, 8, Rgb::RED).unwrap();
        assert_eq!(matrix.pixel(16, 0), None);
        assert_eq!(matrix.pixel(-1, -1), None);

        matrix.line(-4, 3, 20, 3, Rgb::BLUE).unwrap();
        matrix.flush().unwrap();
        let lit = matrix.strip().last().iter().filter(|p| **p != [0, 0, 0]).count();
        assert_eq!(lit, 16);
    }

    #[test]
    fn test_short_chain() {
        let mut matrix = PixelMatrix::new(MockStrip::new(64));
        assert_eq!(matrix.flush(), Err(DisplayError::BufferOverflow));
    }

    #[test]
    fn test_transfer_failure() {
        let mut matrix = PixelMatrix::new(MockStrip::new(PIXEL_COUNT));
        matrix.strip_mut().fail = true;
        assert_eq!(matrix.flush(), Err(DisplayError::Communication));
    }

    #[test]
    fn test_from_config() {
        let config = DisplayConfig {
            brightness: 0.25,
            alternating: true,
        };
        let matrix = PixelMatrix::from_config(MockStrip::new(PIXEL_COUNT), &config).unwrap();
        assert_eq!(matrix.brightness(), 0.25);
        assert_eq!(matrix.layout(), Layout::Alternating);
    }
}
