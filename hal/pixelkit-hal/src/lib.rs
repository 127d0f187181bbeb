//! PixelKit Hardware Abstraction Layer
//!
//! This crate defines the chip-level traits the PixelKit core consumes.
//! Board support code implements them for a specific MCU (ESP32, RP2040,
//! ...) or for a host simulator, so the same application code runs on
//! either.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application driver loop                │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelkit-core (poller, scroll, ...)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pixelkit-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ chip HAL /    │       │ host          │
//! │ embedded-hal  │       │ simulator     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (switch levels)
//! - [`adc::AnalogInput`] - Raw analog samples
//! - [`delay::DelayMs`] - Blocking delays between animation frames
//! - [`tone::ToneOutput`] - Buzzer tones
//! - [`led::LedStrip`] - Addressable LED chain

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod delay;
pub mod gpio;
pub mod led;
pub mod tone;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use delay::DelayMs;
pub use gpio::InputPin;
pub use led::{LedStrip, LedWriteError};
pub use tone::ToneOutput;
