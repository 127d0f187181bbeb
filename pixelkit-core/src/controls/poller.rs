//! Input poller
//!
//! Reads every control once per [`InputPoller::poll`] call, updates the
//! [`ControlState`] and dispatches the events that fired. The caller owns
//! the loop; each call is synchronous.

use heapless::Vec;

use super::events::{AnalogControl, ControlEvent, DigitalControl};
use super::state::ControlState;
use crate::cancel::CancelToken;
use crate::dispatch::{dispatch, ControlHandler};
use crate::traits::ControlInputs;

/// At most one event per control per poll
pub const MAX_EVENTS_PER_POLL: usize = DigitalControl::COUNT + AnalogControl::COUNT;

/// Why a poll stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollError<E> {
    /// The cancel token was set before the poll started; nothing was read
    Cancelled,
    /// A handler failed; controls after `event`'s were not read this poll
    Handler { event: ControlEvent, error: E },
}

/// Events fired during one poll, in dispatch order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    events: Vec<ControlEvent, MAX_EVENTS_PER_POLL>,
}

impl PollReport {
    /// Fired events in order
    pub fn events(&self) -> &[ControlEvent] {
        &self.events
    }

    /// Check if nothing fired
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events fired
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Change detector over a set of control inputs
pub struct InputPoller<I> {
    inputs: I,
    state: ControlState,
}

impl<I: ControlInputs> InputPoller<I> {
    /// Create a poller, seeding the analog baselines with one read each
    ///
    /// All digital controls start released, so a control held at start-up
    /// fires on the first poll.
    pub fn new(mut inputs: I) -> Self {
        let dial = inputs.read_analog(AnalogControl::Dial);
        let microphone = inputs.read_analog(AnalogControl::Microphone);
        Self::with_state(inputs, ControlState::new(dial, microphone))
    }

    /// Create a poller resuming from a known state
    pub fn with_state(inputs: I, state: ControlState) -> Self {
        Self { inputs, state }
    }

    /// Current control state
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Replace the control state
    pub fn set_state(&mut self, state: ControlState) {
        self.state = state;
    }

    /// Access the underlying inputs
    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }

    /// Release the underlying inputs
    pub fn into_inputs(self) -> I {
        self.inputs
    }

    /// Read every control once and dispatch what fired
    ///
    /// Order: digital controls in [`DigitalControl::ALL`] order, then
    /// analog controls in [`AnalogControl::ALL`] order. Each control's
    /// state is committed before its event is dispatched. A handler error
    /// ends the poll immediately; the remaining controls are left for the
    /// next poll.
    pub fn poll<H>(
        &mut self,
        handler: &mut H,
        cancel: &CancelToken,
    ) -> Result<PollReport, PollError<H::Error>>
    where
        H: ControlHandler + ?Sized,
    {
        if cancel.is_cancelled() {
            return Err(PollError::Cancelled);
        }

        let mut report = PollReport::default();

        for control in DigitalControl::ALL {
            let level = self.inputs.read_digital(control);
            let (state, event) = self.state.observe_digital(control, level);
            self.state = state;
            if let Some(event) = event {
                fire(handler, event, &mut report)?;
            }
        }

        for control in AnalogControl::ALL {
            let sample = self.inputs.read_analog(control);
            let (state, event) = self.state.observe_analog(control, sample);
            self.state = state;
            if let Some(event) = event {
                fire(handler, event, &mut report)?;
            }
        }

        Ok(report)
    }
}

fn fire<H>(
    handler: &mut H,
    event: ControlEvent,
    report: &mut PollReport,
) -> Result<(), PollError<H::Error>>
where
    H: ControlHandler + ?Sized,
{
    #[cfg(feature = "defmt")]
    defmt::trace!("control event: {}", event);

    // Capacity covers one event per control
    let _ = report.events.push(event);

    dispatch(handler, event).map_err(|error| PollError::Handler { event, error })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::collections::VecDeque;
    use std::vec::Vec;

    use super::*;
    use crate::dispatch::{HandlerTable, NoopHandler};

    /// Scripted inputs: each read pops the next value for that control,
    /// repeating the last one once the script runs out
    #[derive(Default)]
    struct ScriptedInputs {
        digital: [VecDeque<u8>; DigitalControl::COUNT],
        analog: [VecDeque<u16>; AnalogControl::COUNT],
        last_digital: [u8; DigitalControl::COUNT],
        last_analog: [u16; AnalogControl::COUNT],
        reads: Vec<&'static str>,
    }

    impl ScriptedInputs {
        fn new() -> Self {
            Self {
                last_digital: [1; DigitalControl::COUNT],
                ..Default::default()
            }
        }

        fn digital(mut self, control: DigitalControl, levels: &[u8]) -> Self {
            self.digital[control.index()].extend(levels.iter().copied());
            self
        }

        fn analog(mut self, control: AnalogControl, samples: &[u16]) -> Self {
            self.analog[control.index()].extend(samples.iter().copied());
            self
        }
    }

    impl ControlInputs for ScriptedInputs {
        fn read_digital(&mut self, control: DigitalControl) -> u8 {
            self.reads.push("digital");
            let i = control.index();
            if let Some(level) = self.digital[i].pop_front() {
                self.last_digital[i] = level;
            }
            self.last_digital[i]
        }

        fn read_analog(&mut self, control: AnalogControl) -> u16 {
            self.reads.push("analog");
            let i = control.index();
            if let Some(sample) = self.analog[i].pop_front() {
                self.last_analog[i] = sample;
            }
            self.last_analog[i]
        }
    }

    /// Records every callback in order
    #[derive(Default)]
    struct Recorder {
        seen: Vec<ControlEvent>,
        fail_on: Option<ControlEvent>,
    }

    impl Recorder {
        fn record(&mut self, event: ControlEvent) -> Result<(), &'static str> {
            self.seen.push(event);
            if self.fail_on == Some(event) {
                return Err("handler failed");
            }
            Ok(())
        }
    }

    impl ControlHandler for Recorder {
        type Error = &'static str;

        fn on_up(&mut self) -> Result<(), Self::Error> {
            self.record(ControlEvent::Pressed(DigitalControl::Up))
        }
        fn on_down(&mut self) -> Result<(), Self::Error> {
            self.record(ControlEvent::Pressed(DigitalControl::Down))
        }
        fn on_click(&mut self) -> Result<(), Self::Error> {
            self.record(ControlEvent::Pressed(DigitalControl::Click))
        }
        fn on_button_a(&mut self) -> Result<(), Self::Error> {
            self.record(ControlEvent::Pressed(DigitalControl::ButtonA))
        }
        fn on_button_reset(&mut self) -> Result<(), Self::Error> {
            self.record(ControlEvent::Pressed(DigitalControl::Reset))
        }
        fn on_dial(&mut self, value: u16) -> Result<(), Self::Error> {
            self.record(ControlEvent::Changed(AnalogControl::Dial, value))
        }
        fn on_microphone(&mut self, value: u16) -> Result<(), Self::Error> {
            self.record(ControlEvent::Changed(AnalogControl::Microphone, value))
        }
    }

    fn poll_n<I: ControlInputs>(poller: &mut InputPoller<I>, recorder: &mut Recorder, n: usize) {
        let cancel = CancelToken::new();
        for _ in 0..n {
            poller.poll(recorder, &cancel).unwrap();
        }
    }

    #[test]
    fn test_single_press_over_four_polls() {
        for control in DigitalControl::ALL {
            let inputs = ScriptedInputs::new().digital(control, &[1, 0, 0, 1]);
            let mut poller = InputPoller::with_state(inputs, ControlState::default());
            let mut fired = 0;
            let mut table = HandlerTable::<()>::new();
            let mut count = || -> Result<(), ()> {
                fired += 1;
                Ok(())
            };
            table.set_handler(control, &mut count);

            let cancel = CancelToken::new();
            for _ in 0..4 {
                poller.poll(&mut table, &cancel).unwrap();
            }
            drop(table);
            assert_eq!(fired, 1, "{:?}", control);
            assert!(!poller.state().is_pressed(control));
        }
    }

    #[test]
    fn test_held_control_stays_silent() {
        let inputs = ScriptedInputs::new().digital(DigitalControl::Up, &[0, 0, 0]);
        let mut held = ControlState::default();
        held = held.observe_digital(DigitalControl::Up, 0).0;
        let mut poller = InputPoller::with_state(inputs, held);
        let mut recorder = Recorder::default();

        poll_n(&mut poller, &mut recorder, 3);

        assert!(recorder.seen.is_empty());
        assert!(poller.state().is_pressed(DigitalControl::Up));
    }

    #[test]
    fn test_analog_sequence() {
        let inputs = ScriptedInputs::new().analog(AnalogControl::Dial, &[10, 10, 12, 12, 9]);
        let mut poller = InputPoller::with_state(inputs, ControlState::new(10, 0));
        let mut recorder = Recorder::default();

        poll_n(&mut poller, &mut recorder, 5);

        assert_eq!(
            recorder.seen,
            [
                ControlEvent::Changed(AnalogControl::Dial, 12),
                ControlEvent::Changed(AnalogControl::Dial, 9),
            ]
        );
        assert_eq!(poller.state().last_value(AnalogControl::Dial), 9);
    }

    #[test]
    fn test_new_seeds_analog_baseline() {
        let inputs = ScriptedInputs::new()
            .analog(AnalogControl::Dial, &[500, 500])
            .analog(AnalogControl::Microphone, &[30, 31]);
        let mut poller = InputPoller::new(inputs);
        assert_eq!(poller.state().last_value(AnalogControl::Dial), 500);

        let mut recorder = Recorder::default();
        poll_n(&mut poller, &mut recorder, 1);

        assert_eq!(
            recorder.seen,
            [ControlEvent::Changed(AnalogControl::Microphone, 31)]
        );
    }

    #[test]
    fn test_dispatch_order() {
        let inputs = ScriptedInputs::new()
            .digital(DigitalControl::Reset, &[0])
            .digital(DigitalControl::Up, &[0])
            .digital(DigitalControl::ButtonA, &[0])
            .analog(AnalogControl::Microphone, &[7])
            .analog(AnalogControl::Dial, &[3]);
        let mut poller = InputPoller::with_state(inputs, ControlState::default());
        let mut recorder = Recorder::default();
        let cancel = CancelToken::new();

        let report = poller.poll(&mut recorder, &cancel).unwrap();

        let expected = [
            ControlEvent::Pressed(DigitalControl::Up),
            ControlEvent::Pressed(DigitalControl::ButtonA),
            ControlEvent::Pressed(DigitalControl::Reset),
            ControlEvent::Changed(AnalogControl::Dial, 3),
            ControlEvent::Changed(AnalogControl::Microphone, 7),
        ];
        assert_eq!(recorder.seen, expected);
        assert_eq!(report.events(), &expected);
    }

    #[test]
    fn test_each_control_read_once() {
        let mut poller = InputPoller::with_state(ScriptedInputs::new(), ControlState::default());
        let cancel = CancelToken::new();

        poller.poll(&mut NoopHandler, &cancel).unwrap();

        let reads = &poller.inputs_mut().reads;
        assert_eq!(reads.len(), MAX_EVENTS_PER_POLL);
        assert!(reads[..DigitalControl::COUNT].iter().all(|r| *r == "digital"));
        assert!(reads[DigitalControl::COUNT..].iter().all(|r| *r == "analog"));
    }

    #[test]
    fn test_handler_error_stops_poll() {
        let inputs = ScriptedInputs::new()
            .digital(DigitalControl::Down, &[0])
            .digital(DigitalControl::Click, &[0])
            .analog(AnalogControl::Dial, &[42]);
        let mut poller = InputPoller::with_state(inputs, ControlState::default());
        let mut recorder = Recorder {
            fail_on: Some(ControlEvent::Pressed(DigitalControl::Down)),
            ..Default::default()
        };
        let cancel = CancelToken::new();

        let err = poller.poll(&mut recorder, &cancel).unwrap_err();
        assert_eq!(
            err,
            PollError::Handler {
                event: ControlEvent::Pressed(DigitalControl::Down),
                error: "handler failed",
            }
        );
        assert_eq!(recorder.seen, [ControlEvent::Pressed(DigitalControl::Down)]);
        assert!(poller.state().is_pressed(DigitalControl::Down));
        assert!(!poller.state().is_pressed(DigitalControl::Click));

        // The controls skipped by the failed poll fire on the next one
        recorder.fail_on = None;
        poller.poll(&mut recorder, &cancel).unwrap();
        assert_eq!(
            &recorder.seen[1..],
            [
                ControlEvent::Pressed(DigitalControl::Click),
                ControlEvent::Changed(AnalogControl::Dial, 42),
            ]
        );
    }

    #[test]
    fn test_cancelled_poll_reads_nothing() {
        let inputs = ScriptedInputs::new().digital(DigitalControl::Up, &[0]);
        let mut poller = InputPoller::with_state(inputs, ControlState::default());
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = poller.poll(&mut NoopHandler, &cancel).unwrap_err();

        assert_eq!(err, PollError::Cancelled);
        assert!(poller.inputs_mut().reads.is_empty());
        assert_eq!(poller.state(), ControlState::default());
    }
}
