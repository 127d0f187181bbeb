//! Board-agnostic core logic for the PixelKit LED matrix
//!
//! This crate contains all logic that does not depend on a specific
//! board:
//!
//! - Control change detection (active-low press edges, analog changes)
//! - Event dispatch to per-control hooks
//! - Glyph tables and the text compositor
//! - The scroll renderer
//! - Configuration type definitions
//!
//! [`kit::PixelKit`] bundles these into the interface an application
//! drives from its main loop.

#![no_std]
#![deny(unsafe_code)]

pub mod cancel;
pub mod color;
pub mod compose;
pub mod config;
pub mod controls;
pub mod dispatch;
pub mod glyph;
pub mod kit;
pub mod scroll;
pub mod traits;

#[cfg(test)]
mod testing;

pub use cancel::CancelToken;
pub use color::Rgb;
pub use compose::{compose, ComposeError, ScrollBuffer};
pub use controls::{AnalogControl, ControlEvent, DigitalControl};
pub use dispatch::{dispatch, ControlHandler, HandlerTable};
pub use glyph::{Charset, Glyph};
pub use kit::PixelKit;
pub use scroll::{scroll, ScrollOutcome, ScrollStyle};

/// Grid width in pixels
pub const GRID_WIDTH: u8 = 16;

/// Grid height in pixels
pub const GRID_HEIGHT: u8 = 8;
