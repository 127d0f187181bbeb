//! Raw control readings

use crate::controls::{AnalogControl, DigitalControl};

/// Source of raw control readings
///
/// Reads are assumed to always succeed and return an in-range value.
pub trait ControlInputs {
    /// Raw level of a digital control (0 = pressed, nonzero = released)
    fn read_digital(&mut self, control: DigitalControl) -> u8;

    /// Raw sample of an analog control
    fn read_analog(&mut self, control: AnalogControl) -> u16;
}

impl<T: ControlInputs + ?Sized> ControlInputs for &mut T {
    fn read_digital(&mut self, control: DigitalControl) -> u8 {
        T::read_digital(self, control)
    }

    fn read_analog(&mut self, control: AnalogControl) -> u16 {
        T::read_analog(self, control)
    }
}
