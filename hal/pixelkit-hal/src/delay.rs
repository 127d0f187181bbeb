//! Blocking delay abstraction
//!
//! Animations on the PixelKit are strictly sequential: each frame is
//! rendered, flushed, and then the caller's thread sleeps for the frame
//! interval.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DelayMs + ?Sized> DelayMs for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
