//! GPIO pin abstractions
//!
//! Provides the digital input trait implemented by chip-specific HALs.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Reads take `&mut self` because some HALs
/// (and `embedded-hal` 1.0) need exclusive access to sample a pin.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }

    /// Raw level of the pin: 0 for low, 1 for high
    fn level(&mut self) -> u8 {
        u8::from(self.is_high())
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&mut self) -> bool {
        T::is_high(self)
    }
}
