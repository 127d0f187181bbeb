//! The PixelKit facade
//!
//! Owns every collaborator of one board and exposes the operations an
//! application calls from its main loop:
//!
//! ```text
//! loop {
//!     kit.poll(&mut handler)?;      // dispatch control events
//!     kit.scroll_text("HELLO")?;    // block until the phrase has passed
//! }
//! ```
//!
//! The cancel token is borrowed so an interrupt handler (or another
//! core) can hold the same `static` token and stop a running scroll.

use pixelkit_hal::{DelayMs, ToneOutput};

use crate::cancel::CancelToken;
use crate::color::Rgb;
use crate::compose::{compose, ComposeError};
use crate::config::{ConfigError, KitConfig};
use crate::controls::{ControlState, InputPoller, PollError, PollReport};
use crate::dispatch::ControlHandler;
use crate::glyph::Charset;
use crate::scroll::{scroll, ScrollOutcome, ScrollStyle};
use crate::traits::{ControlInputs, DisplayError, PixelDisplay, PixelDisplayExt};

/// Errors from the kit's display and text operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KitError {
    /// Rejected configuration value
    Config(ConfigError),
    /// Display failure
    Display(DisplayError),
    /// Phrase too long to compose
    Compose(ComposeError),
}

impl From<ConfigError> for KitError {
    fn from(err: ConfigError) -> Self {
        KitError::Config(err)
    }
}

impl From<DisplayError> for KitError {
    fn from(err: DisplayError) -> Self {
        KitError::Display(err)
    }
}

impl From<ComposeError> for KitError {
    fn from(err: ComposeError) -> Self {
        KitError::Compose(err)
    }
}

/// One board: grid, controls, buzzer and frame timer
pub struct PixelKit<'c, D, I, B, T> {
    display: D,
    poller: InputPoller<I>,
    buzzer: B,
    delay: T,
    charset: Charset,
    config: KitConfig,
    cancel: &'c CancelToken,
}

impl<'c, D, I, B, T> PixelKit<'c, D, I, B, T>
where
    D: PixelDisplay,
    I: ControlInputs,
    B: ToneOutput,
    T: DelayMs,
{
    /// Assemble a kit
    ///
    /// Validates `config`, applies its brightness and seeds the analog
    /// baselines from one read of each analog control.
    pub fn new(
        mut display: D,
        inputs: I,
        buzzer: B,
        delay: T,
        config: KitConfig,
        cancel: &'c CancelToken,
    ) -> Result<Self, KitError> {
        config.validate()?;
        display.set_brightness(config.display.brightness)?;

        Ok(Self {
            display,
            poller: InputPoller::new(inputs),
            buzzer,
            delay,
            charset: Charset::builtin(),
            config,
            cancel,
        })
    }

    /// Read every control once and dispatch what fired
    pub fn poll<H>(&mut self, handler: &mut H) -> Result<PollReport, PollError<H::Error>>
    where
        H: ControlHandler + ?Sized,
    {
        self.poller.poll(handler, self.cancel)
    }

    /// Scroll a phrase across the grid in the configured style
    ///
    /// Blocks until the last column has passed or the kit is interrupted.
    pub fn scroll_text(&mut self, phrase: &str) -> Result<ScrollOutcome, KitError> {
        let style = self.config.scroll.style();
        self.scroll_text_with(phrase, &style)
    }

    /// Scroll a phrase with an explicit style
    pub fn scroll_text_with(
        &mut self,
        phrase: &str,
        style: &ScrollStyle,
    ) -> Result<ScrollOutcome, KitError> {
        let buffer = compose(&self.charset, phrase)?;
        let outcome = scroll(&mut self.display, &mut self.delay, &buffer, style, self.cancel)?;
        Ok(outcome)
    }

    /// Blank the grid and stop all further polling and scrolling
    ///
    /// Stays in effect until [`PixelKit::resume`].
    pub fn interrupt(&mut self) -> Result<(), DisplayError> {
        self.cancel.cancel();
        self.display.clear()?;
        self.display.flush()?;

        #[cfg(feature = "defmt")]
        defmt::info!("pixelkit interrupted");

        Ok(())
    }

    /// Clear a previous interrupt, returning whether one was pending
    pub fn resume(&mut self) -> bool {
        self.cancel.reset()
    }

    /// Check if the kit has been interrupted
    pub fn is_interrupted(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Play a tone; does not wait for it to finish
    pub fn beep(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.buzzer.tone(frequency_hz, duration_ms);
    }

    pub fn set_pixel(&mut self, x: i16, y: i16, color: impl Into<Rgb>) -> Result<(), DisplayError> {
        self.display.set_pixel(x, y, color.into())
    }

    pub fn set_pixel_hex(&mut self, x: i16, y: i16, hex: u32) -> Result<(), DisplayError> {
        self.display.set_pixel(x, y, Rgb::from_hex(hex))
    }

    /// Set a pixel from hue (degrees), saturation and value (0.0-1.0)
    pub fn set_pixel_hsv(
        &mut self,
        x: i16,
        y: i16,
        hue: f32,
        saturation: f32,
        value: f32,
    ) -> Result<(), DisplayError> {
        self.display.set_pixel(x, y, Rgb::from_hsv(hue, saturation, value))
    }

    /// Color of a pixel in the working frame, `None` outside the grid
    pub fn get_pixel(&self, x: i16, y: i16) -> Option<Rgb> {
        self.display.pixel(x, y)
    }

    pub fn get_pixel_hex(&self, x: i16, y: i16) -> Option<u32> {
        self.get_pixel(x, y).map(Rgb::to_hex)
    }

    /// Fill the whole frame with one color
    pub fn set_background(&mut self, color: impl Into<Rgb>) -> Result<(), DisplayError> {
        self.display.fill(color.into())
    }

    pub fn set_background_hex(&mut self, hex: u32) -> Result<(), DisplayError> {
        self.display.fill(Rgb::from_hex(hex))
    }

    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.display.clear()
    }

    /// Push the working frame to the LEDs
    pub fn render(&mut self) -> Result<(), DisplayError> {
        self.display.flush()
    }

    /// Change the grid brightness, 0.0-1.0
    pub fn set_brightness(&mut self, brightness: f32) -> Result<(), KitError> {
        let mut display = self.config.display;
        display.brightness = brightness;
        KitConfig {
            display,
            ..self.config
        }
        .validate()?;

        self.display.set_brightness(brightness)?;
        self.config.display = display;
        Ok(())
    }

    /// Draw one character with its top-left corner at (x, y)
    ///
    /// Returns `false` when the character has no glyph; nothing is drawn.
    pub fn draw_letter(
        &mut self,
        x: i16,
        y: i16,
        letter: char,
        color: impl Into<Rgb>,
    ) -> Result<bool, DisplayError> {
        let Some(glyph) = self.charset.get(letter) else {
            return Ok(false);
        };
        self.display.draw_glyph(x, y, glyph, color.into())?;
        Ok(true)
    }

    pub fn line(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        color: impl Into<Rgb>,
    ) -> Result<(), DisplayError> {
        self.display.line(x0, y0, x1, y1, color.into())
    }

    pub fn hline(
        &mut self,
        x: i16,
        y: i16,
        length: u8,
        color: impl Into<Rgb>,
    ) -> Result<(), DisplayError> {
        self.display.hline(x, y, length, color.into())
    }

    pub fn vline(
        &mut self,
        x: i16,
        y: i16,
        length: u8,
        color: impl Into<Rgb>,
    ) -> Result<(), DisplayError> {
        self.display.vline(x, y, length, color.into())
    }

    pub fn rect(
        &mut self,
        x: i16,
        y: i16,
        width: u8,
        height: u8,
        color: impl Into<Rgb>,
    ) -> Result<(), DisplayError> {
        self.display.rect(x, y, width, height, color.into())
    }

    pub fn fill_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u8,
        height: u8,
        color: impl Into<Rgb>,
    ) -> Result<(), DisplayError> {
        self.display.fill_rect(x, y, width, height, color.into())
    }

    /// Current control state
    pub fn controls(&self) -> ControlState {
        self.poller.state()
    }

    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Charset used by [`PixelKit::scroll_text`] and [`PixelKit::draw_letter`]
    pub fn charset_mut(&mut self) -> &mut Charset {
        &mut self.charset
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn inputs_mut(&mut self) -> &mut I {
        self.poller.inputs_mut()
    }
}
