//! Control state
//!
//! Last observed level/value of every monitored control. This is a plain
//! value: transitions take the state and return the next one together
//! with the event (if any) the observation fired.

use super::events::{AnalogControl, ControlEvent, DigitalControl};

/// Last observed state of every control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    /// Pressed flag per digital control, indexed by [`DigitalControl::index`]
    pressed: [bool; DigitalControl::COUNT],
    /// Last sample per analog control, indexed by [`AnalogControl::index`]
    last_values: [u16; AnalogControl::COUNT],
}

impl ControlState {
    /// All controls released, with the given initial analog samples
    pub const fn new(dial: u16, microphone: u16) -> Self {
        Self {
            pressed: [false; DigitalControl::COUNT],
            last_values: [dial, microphone],
        }
    }

    /// Check if a digital control is currently held
    pub fn is_pressed(&self, control: DigitalControl) -> bool {
        self.pressed[control.index()]
    }

    /// Last sample seen for an analog control
    pub fn last_value(&self, control: AnalogControl) -> u16 {
        self.last_values[control.index()]
    }

    /// Apply one raw digital level (active-low: 0 means pressed)
    ///
    /// Fires [`ControlEvent::Pressed`] only on the released -> pressed
    /// edge. Release is silent. No debounce is applied.
    pub fn observe_digital(
        mut self,
        control: DigitalControl,
        level: u8,
    ) -> (Self, Option<ControlEvent>) {
        let held = &mut self.pressed[control.index()];
        let event = if level == 0 && !*held {
            *held = true;
            Some(ControlEvent::Pressed(control))
        } else {
            if level != 0 && *held {
                *held = false;
            }
            None
        };
        (self, event)
    }

    /// Apply one raw analog sample
    ///
    /// Fires [`ControlEvent::Changed`] whenever the sample differs from
    /// the cached one (exact comparison, no hysteresis).
    pub fn observe_analog(
        mut self,
        control: AnalogControl,
        sample: u16,
    ) -> (Self, Option<ControlEvent>) {
        let last = &mut self.last_values[control.index()];
        if sample == *last {
            return (self, None);
        }
        *last = sample;
        (self, Some(ControlEvent::Changed(control, sample)))
    }
}
