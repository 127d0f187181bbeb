//! Control identities and the events they produce

/// Digital (switch) controls, in poll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitalControl {
    /// Joystick pushed up
    Up,
    /// Joystick pushed down
    Down,
    /// Joystick pushed left
    Left,
    /// Joystick pushed right
    Right,
    /// Joystick pressed in
    Click,
    /// Button A
    ButtonA,
    /// Button B
    ButtonB,
    /// Reset button
    Reset,
}

impl DigitalControl {
    /// Number of digital controls
    pub const COUNT: usize = 8;

    /// All digital controls in poll order: joystick first, then buttons
    pub const ALL: [DigitalControl; Self::COUNT] = [
        DigitalControl::Up,
        DigitalControl::Down,
        DigitalControl::Left,
        DigitalControl::Right,
        DigitalControl::Click,
        DigitalControl::ButtonA,
        DigitalControl::ButtonB,
        DigitalControl::Reset,
    ];

    /// Position in [`DigitalControl::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the five joystick directions
    pub fn is_joystick(self) -> bool {
        matches!(
            self,
            DigitalControl::Up
                | DigitalControl::Down
                | DigitalControl::Left
                | DigitalControl::Right
                | DigitalControl::Click
        )
    }
}

/// Analog controls, in poll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogControl {
    /// Potentiometer dial
    Dial,
    /// Microphone level
    Microphone,
}

impl AnalogControl {
    /// Number of analog controls
    pub const COUNT: usize = 2;

    /// All analog controls in poll order
    pub const ALL: [AnalogControl; Self::COUNT] = [AnalogControl::Dial, AnalogControl::Microphone];

    /// Position in [`AnalogControl::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Event fired by the poller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// A digital control went from released to pressed
    Pressed(DigitalControl),
    /// An analog control reported a sample different from the last one
    Changed(AnalogControl, u16),
}

impl ControlEvent {
    /// Returns true if this came from a digital control
    pub fn is_press(&self) -> bool {
        matches!(self, ControlEvent::Pressed(_))
    }

    /// The new sample for analog events
    pub fn value(&self) -> Option<u16> {
        match self {
            ControlEvent::Changed(_, value) => Some(*value),
            ControlEvent::Pressed(_) => None,
        }
    }
}
