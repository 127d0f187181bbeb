//! embedded-hal 1.0 digital input adapter

use embedded_hal::digital::InputPin as EhPin;
use pixelkit_hal::InputPin;

/// Wraps an `embedded-hal` input pin
///
/// A failed read is reported as high. The switches are active-low, so a
/// faulty pin reads as released and never fires a press.
pub struct EhInputPin<P> {
    pin: P,
}

impl<P: EhPin> EhInputPin<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhPin> InputPin for EhInputPin<P> {
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("input pin read failed");
                true
            }
        }
    }
}
