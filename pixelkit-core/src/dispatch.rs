//! Event dispatch
//!
//! Every control has one hook. Hooks default to a no-op, and an
//! application overrides the ones it cares about, either by implementing
//! [`ControlHandler`] on its own type or by registering closures in a
//! [`HandlerTable`].
//!
//! Dispatch is a direct synchronous call. There is no queue and no retry:
//! a failing hook's error is returned to the poller as-is.

use core::convert::Infallible;

use crate::controls::{AnalogControl, ControlEvent, DigitalControl};

/// Per-control event hooks
///
/// Digital hooks take no argument; analog hooks receive the new sample.
pub trait ControlHandler {
    /// Error a hook may fail with
    type Error;

    /// Joystick pushed up
    fn on_up(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Joystick pushed down
    fn on_down(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Joystick pushed left
    fn on_left(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Joystick pushed right
    fn on_right(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Joystick pressed in
    fn on_click(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Button A pressed
    fn on_button_a(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Button B pressed
    fn on_button_b(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Reset button pressed
    fn on_button_reset(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Dial moved to `value`
    fn on_dial(&mut self, _value: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Microphone level changed to `value`
    fn on_microphone(&mut self, _value: u16) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Route one event to its hook
pub fn dispatch<H>(handler: &mut H, event: ControlEvent) -> Result<(), H::Error>
where
    H: ControlHandler + ?Sized,
{
    match event {
        ControlEvent::Pressed(control) => match control {
            DigitalControl::Up => handler.on_up(),
            DigitalControl::Down => handler.on_down(),
            DigitalControl::Left => handler.on_left(),
            DigitalControl::Right => handler.on_right(),
            DigitalControl::Click => handler.on_click(),
            DigitalControl::ButtonA => handler.on_button_a(),
            DigitalControl::ButtonB => handler.on_button_b(),
            DigitalControl::Reset => handler.on_button_reset(),
        },
        ControlEvent::Changed(AnalogControl::Dial, value) => handler.on_dial(value),
        ControlEvent::Changed(AnalogControl::Microphone, value) => handler.on_microphone(value),
    }
}

/// Handler with every hook left at the default no-op
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl ControlHandler for NoopHandler {
    type Error = Infallible;
}

/// Hook for a digital control
pub type PressCallback<'a, E> = &'a mut dyn FnMut() -> Result<(), E>;

/// Hook for an analog control, called with the new sample
pub type ValueCallback<'a, E> = &'a mut dyn FnMut(u16) -> Result<(), E>;

/// Closure registry, one slot per control
///
/// Empty slots behave like the default no-op hook. Replacing a hook only
/// affects events dispatched afterwards.
pub struct HandlerTable<'a, E = Infallible> {
    press: [Option<PressCallback<'a, E>>; DigitalControl::COUNT],
    change: [Option<ValueCallback<'a, E>>; AnalogControl::COUNT],
}

impl<E> Default for HandlerTable<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> HandlerTable<'a, E> {
    /// Create a table with every hook empty
    pub fn new() -> Self {
        Self {
            press: core::array::from_fn(|_| None),
            change: core::array::from_fn(|_| None),
        }
    }

    /// Install the hook for a digital control, returning the previous one
    pub fn set_handler(
        &mut self,
        control: DigitalControl,
        callback: PressCallback<'a, E>,
    ) -> Option<PressCallback<'a, E>> {
        self.press[control.index()].replace(callback)
    }

    /// Install the hook for an analog control, returning the previous one
    pub fn set_analog_handler(
        &mut self,
        control: AnalogControl,
        callback: ValueCallback<'a, E>,
    ) -> Option<ValueCallback<'a, E>> {
        self.change[control.index()].replace(callback)
    }

    /// Reset a digital control's hook to the no-op
    pub fn clear_handler(&mut self, control: DigitalControl) -> Option<PressCallback<'a, E>> {
        self.press[control.index()].take()
    }

    /// Reset an analog control's hook to the no-op
    pub fn clear_analog_handler(&mut self, control: AnalogControl) -> Option<ValueCallback<'a, E>> {
        self.change[control.index()].take()
    }

    /// Check if a digital control has a hook installed
    pub fn has_handler(&self, control: DigitalControl) -> bool {
        self.press[control.index()].is_some()
    }

    fn fire_press(&mut self, control: DigitalControl) -> Result<(), E> {
        match &mut self.press[control.index()] {
            Some(callback) => (*callback)(),
            None => Ok(()),
        }
    }

    fn fire_change(&mut self, control: AnalogControl, value: u16) -> Result<(), E> {
        match &mut self.change[control.index()] {
            Some(callback) => (*callback)(value),
            None => Ok(()),
        }
    }
}

impl<E> ControlHandler for HandlerTable<'_, E> {
    type Error = E;

    fn on_up(&mut self) -> Result<(), E> {
        self.fire_press(DigitalControl::Up)
    }

    fn on_down(&mut self) -> Result<(), E> {
        self.fire_press(DigitalControl::Down)
    }

    fn on_left(&mut self) -> Result<(), E> {
        self.fire_press(DigitalControl::Left)
    }

    fn on_right(&mut self) -> Result<(), E> {
        self.fire_press(DigitalControl::Right)
    }

    fn on_click(&mut self) -> Result<(), E> {
        self.fire_press(DigitalControl::Click)
    }

    fn on_button_a(&mut self) -> Result<(), E> {
        self.fire_press(DigitalControl::ButtonA)
    }

    fn on_button_b(&mut self) -> Result<(), E> {
        self.fire_press(DigitalControl::ButtonB)
    }

    fn on_button_reset(&mut self) -> Result<(), E> {
        self.fire_press(DigitalControl::Reset)
    }

    fn on_dial(&mut self, value: u16) -> Result<(), E> {
        self.fire_change(AnalogControl::Dial, value)
    }

    fn on_microphone(&mut self, value: u16) -> Result<(), E> {
        self.fire_change(AnalogControl::Microphone, value)
    }
}
