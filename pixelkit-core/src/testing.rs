//! Mock collaborators shared by the unit tests

extern crate std;

use std::vec::Vec;

use pixelkit_hal::{DelayMs, ToneOutput};

use crate::color::Rgb;
use crate::controls::{AnalogControl, DigitalControl};
use crate::traits::{ControlInputs, DisplayError, PixelDisplay};

pub const WIDTH: usize = 16;
pub const HEIGHT: usize = 8;

pub type Frame = [[Rgb; WIDTH]; HEIGHT];

/// In-memory grid that keeps a copy of every flushed frame
pub struct MockDisplay {
    pub frame: Frame,
    pub flushed: Vec<Frame>,
    pub brightness: f32,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            frame: [[Rgb::BLACK; WIDTH]; HEIGHT],
            flushed: Vec::new(),
            brightness: 1.0,
        }
    }

    /// Pixels in the working frame that are not black
    pub fn lit_count(&self) -> usize {
        self.frame
            .iter()
            .flatten()
            .filter(|c| **c != Rgb::BLACK)
            .count()
    }
}

impl PixelDisplay for MockDisplay {
    fn dimensions(&self) -> (u8, u8) {
        (WIDTH as u8, HEIGHT as u8)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Rgb) -> Result<(), DisplayError> {
        if (0..WIDTH as i16).contains(&x) && (0..HEIGHT as i16).contains(&y) {
            self.frame[y as usize][x as usize] = color;
        }
        Ok(())
    }

    fn pixel(&self, x: i16, y: i16) -> Option<Rgb> {
        if x < 0 || y < 0 {
            return None;
        }
        self.frame.get(y as usize)?.get(x as usize).copied()
    }

    fn fill(&mut self, color: Rgb) -> Result<(), DisplayError> {
        self.frame = [[color; WIDTH]; HEIGHT];
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flushed.push(self.frame);
        Ok(())
    }

    fn set_brightness(&mut self, brightness: f32) -> Result<(), DisplayError> {
        self.brightness = brightness;
        Ok(())
    }
}

/// Delay that only adds up the requested time
#[derive(Default)]
pub struct MockDelay {
    pub total_ms: u64,
    pub calls: usize,
}

impl DelayMs for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms as u64;
        self.calls += 1;
    }
}

/// Buzzer that records (frequency, duration) pairs
#[derive(Default)]
pub struct MockBuzzer {
    pub tones: Vec<(u32, u32)>,
}

impl ToneOutput for MockBuzzer {
    fn tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.tones.push((frequency_hz, duration_ms));
    }
}

/// Inputs that return whatever the test last set
pub struct MockInputs {
    pub digital: [u8; DigitalControl::COUNT],
    pub analog: [u16; AnalogControl::COUNT],
}

impl Default for MockInputs {
    fn default() -> Self {
        Self {
            digital: [1; DigitalControl::COUNT],
            analog: [0; AnalogControl::COUNT],
        }
    }
}

impl MockInputs {
    pub fn press(&mut self, control: DigitalControl) {
        self.digital[control.index()] = 0;
    }

    pub fn release(&mut self, control: DigitalControl) {
        self.digital[control.index()] = 1;
    }
}

impl ControlInputs for MockInputs {
    fn read_digital(&mut self, control: DigitalControl) -> u8 {
        self.digital[control.index()]
    }

    fn read_analog(&mut self, control: AnalogControl) -> u16 {
        self.analog[control.index()]
    }
}
