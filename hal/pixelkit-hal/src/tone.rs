//! Buzzer abstraction

/// Tone output (piezo buzzer driven by PWM)
///
/// Fire-and-forget: the implementation decides whether the call blocks
/// for the tone duration.
pub trait ToneOutput {
    /// Play a square wave at `frequency_hz` for `duration_ms`
    fn tone(&mut self, frequency_hz: u32, duration_ms: u32);
}

impl<T: ToneOutput + ?Sized> ToneOutput for &mut T {
    fn tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        T::tone(self, frequency_hz, duration_ms)
    }
}
