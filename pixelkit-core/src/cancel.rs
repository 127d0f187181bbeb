//! Cooperative cancellation
//!
//! Long-running work (the poll loop, a scroll animation) checks a
//! [`CancelToken`] at well-defined points: at the start of each poll
//! cycle and before each scroll frame. Anything holding a shared
//! reference can request a stop, including an interrupt handler, so the
//! token is usually a `static`.

use portable_atomic::{AtomicBool, Ordering};

/// Stop flag shared between the driver loop and whoever requests a stop
#[derive(Debug, Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
}

impl CancelToken {
    /// Create a token that has not been cancelled
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Clear the flag so the token can be reused
    ///
    /// Returns whether it had been cancelled.
    pub fn reset(&self) -> bool {
        self.cancelled.swap(false, Ordering::AcqRel)
    }
}
