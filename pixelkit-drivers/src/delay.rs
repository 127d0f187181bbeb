//! Frame delay adapters

use embedded_hal::delay::DelayNs;
use pixelkit_hal::DelayMs;

/// Wraps an `embedded-hal` delay provider
pub struct EhDelay<D> {
    delay: D,
}

impl<D: DelayNs> EhDelay<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> DelayMs for EhDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

/// Thread-sleep delay for host builds and simulators
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl DelayMs for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}
