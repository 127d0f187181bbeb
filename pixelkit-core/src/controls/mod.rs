//! Input change detection
//!
//! Turns raw switch levels and analog samples into discrete events:
//!
//! - Digital controls are active-low and fire once on the press edge.
//! - Analog controls fire whenever the sample changes.
//!
//! Neither path debounces; a bouncing switch fires on every bounce that
//! a poll happens to observe.

pub mod events;
pub mod poller;
pub mod state;

pub use events::{AnalogControl, ControlEvent, DigitalControl};
pub use poller::{InputPoller, PollError, PollReport, MAX_EVENTS_PER_POLL};
pub use state::ControlState;
