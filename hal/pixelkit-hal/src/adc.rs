//! Analog input abstractions

/// Analog input channel
///
/// Returns the raw, unfiltered sample. The PixelKit reports samples in
/// the 16-bit range (0-65535) regardless of the converter resolution;
/// implementations scale their native reading up to that range.
pub trait AnalogInput {
    /// Take one sample
    fn sample(&mut self) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn sample(&mut self) -> u16 {
        T::sample(self)
    }
}

/// Scale a native ADC reading to the 16-bit range
///
/// `bits` is the converter resolution (e.g. 12 for the ESP32 ADC).
/// Readings above the resolution saturate. A zero-bit converter always
/// reads 0.
pub fn scale_to_u16(raw: u16, bits: u8) -> u16 {
    if bits == 0 {
        return 0;
    }
    if bits >= 16 {
        return raw;
    }
    let max = (1u32 << bits) - 1;
    let raw = (raw as u32).min(max);
    ((raw * u16::MAX as u32) / max) as u16
}
