//! Collaborator traits
//!
//! These traits define the interface between the input/scroll logic and
//! the board: where control levels come from and where pixels go.

pub mod display;
pub mod input;

pub use display::{DisplayError, PixelDisplay, PixelDisplayExt};
pub use input::ControlInputs;
