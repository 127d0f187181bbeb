//! Board adapters
//!
//! Concrete implementations of the pixelkit-core collaborator traits on
//! top of the chip-level pixelkit-hal traits:
//!
//! - Control inputs (8 switch pins, dial, microphone)
//! - `embedded-hal` 1.0 pin and delay adapters
//! - The 16x8 LED matrix framebuffer

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod delay;
pub mod input;
pub mod matrix;

pub use delay::EhDelay;
#[cfg(feature = "std")]
pub use delay::StdDelay;
pub use input::{BoardInputs, EhInputPin};
pub use matrix::{Layout, PixelMatrix};
