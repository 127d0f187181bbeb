//! Control inputs
//!
//! Reads the joystick and button switches as raw active-low levels and
//! the dial and microphone as raw samples. No inversion or filtering is
//! applied here; edge detection lives in the core poller.

mod eh;

pub use eh::EhInputPin;

use pixelkit_core::controls::{AnalogControl, DigitalControl};
use pixelkit_core::traits::ControlInputs;
use pixelkit_hal::{AnalogInput, InputPin};

/// The board's control wiring
///
/// `pins` are indexed by [`DigitalControl::index`]: up, down, left,
/// right, click, A, B, reset.
pub struct BoardInputs<P, D, M> {
    pins: [P; DigitalControl::COUNT],
    dial: D,
    microphone: M,
}

impl<P, D, M> BoardInputs<P, D, M>
where
    P: InputPin,
    D: AnalogInput,
    M: AnalogInput,
{
    pub fn new(pins: [P; DigitalControl::COUNT], dial: D, microphone: M) -> Self {
        Self { pins, dial, microphone }
    }

    /// Pin wired to `control`
    pub fn pin_mut(&mut self, control: DigitalControl) -> &mut P {
        &mut self.pins[control.index()]
    }

    /// Release the pins and analog channels
    pub fn release(self) -> ([P; DigitalControl::COUNT], D, M) {
        (self.pins, self.dial, self.microphone)
    }
}

impl<P, D, M> ControlInputs for BoardInputs<P, D, M>
where
    P: InputPin,
    D: AnalogInput,
    M: AnalogInput,
{
    fn read_digital(&mut self, control: DigitalControl) -> u8 {
        self.pins[control.index()].level()
    }

    fn read_analog(&mut self, control: AnalogControl) -> u16 {
        match control {
            AnalogControl::Dial => self.dial.sample(),
            AnalogControl::Microphone => self.microphone.sample(),
        }
    }
}
