//! Scroll renderer
//!
//! Plays a [`ScrollBuffer`] across the grid as a right-to-left marquee.
//! Frame `o` shows buffer columns `o..o + width` of the display, so the
//! text slides one column left per frame until the last column has
//! passed the left edge.
//!
//! The animation blocks the caller for its whole duration. The cancel
//! token is checked before every frame; nothing else interrupts it.

use pixelkit_hal::DelayMs;

use crate::cancel::CancelToken;
use crate::color::Rgb;
use crate::compose::ScrollBuffer;
use crate::glyph::GLYPH_HEIGHT;
use crate::traits::{DisplayError, PixelDisplay};

/// Default time between frames
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 100;

/// Default grid row for the top of the text
pub const DEFAULT_ORIGIN_ROW: u8 = 1;

/// How a scroll is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollStyle {
    /// Text color
    pub color: Rgb,
    /// Color every frame is cleared to
    pub background: Rgb,
    /// Delay after each flushed frame
    pub frame_interval_ms: u32,
    /// Grid row of the top glyph row
    pub origin_row: u8,
}

impl Default for ScrollStyle {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            background: Rgb::BLACK,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            origin_row: DEFAULT_ORIGIN_ROW,
        }
    }
}

/// How a scroll ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollOutcome {
    /// Every frame was shown
    Completed { frames: usize },
    /// The cancel token stopped the scroll after `frames` frames
    Cancelled { frames: usize },
}

impl ScrollOutcome {
    /// Number of frames flushed
    pub fn frames(&self) -> usize {
        match self {
            ScrollOutcome::Completed { frames } | ScrollOutcome::Cancelled { frames } => *frames,
        }
    }

    /// Check if the scroll ran to the end
    pub fn is_completed(&self) -> bool {
        matches!(self, ScrollOutcome::Completed { .. })
    }
}

/// Draw the part of `buffer` that starts at column `offset`
///
/// Covers the full display width and [`GLYPH_HEIGHT`] rows from
/// `origin_row`. Only lit cells are written; columns past the end of the
/// buffer are skipped.
pub fn draw_window<D>(
    display: &mut D,
    buffer: &ScrollBuffer,
    offset: usize,
    color: Rgb,
    origin_row: u8,
) -> Result<(), DisplayError>
where
    D: PixelDisplay + ?Sized,
{
    let (width, _) = display.dimensions();
    for x in 0..width as usize {
        let Some(column) = offset.checked_add(x).and_then(|col| buffer.column(col)) else {
            break;
        };
        for y in 0..GLYPH_HEIGHT {
            if column & (1 << y) != 0 {
                display.set_pixel(x as i16, origin_row as i16 + y as i16, color)?;
            }
        }
    }
    Ok(())
}

/// Play `buffer` across the display, one column shift per frame
///
/// Each frame: fill with the background, draw the window, flush, wait
/// `frame_interval_ms`. A buffer of width `n` takes exactly `n` frames.
pub fn scroll<D, T>(
    display: &mut D,
    delay: &mut T,
    buffer: &ScrollBuffer,
    style: &ScrollStyle,
    cancel: &CancelToken,
) -> Result<ScrollOutcome, DisplayError>
where
    D: PixelDisplay + ?Sized,
    T: DelayMs + ?Sized,
{
    #[cfg(feature = "defmt")]
    defmt::debug!("scrolling {} frames", buffer.width());

    for offset in 0..buffer.width() {
        if cancel.is_cancelled() {
            #[cfg(feature = "defmt")]
            defmt::debug!("scroll cancelled after {} frames", offset);
            return Ok(ScrollOutcome::Cancelled { frames: offset });
        }

        display.fill(style.background)?;
        draw_window(display, buffer, offset, style.color, style.origin_row)?;
        display.flush()?;
        delay.delay_ms(style.frame_interval_ms);
    }

    Ok(ScrollOutcome::Completed {
        frames: buffer.width(),
    })
}
