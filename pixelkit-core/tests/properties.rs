//! Property-based tests for the color, control and compositor laws.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use pixelkit_core::controls::{AnalogControl, ControlEvent, ControlState, DigitalControl};
use pixelkit_core::{compose, Charset, Rgb};

/// Phrases mixing known characters with ones the charset lacks
fn arb_phrase() -> impl Strategy<Value = String> {
    "[A-Z0-9 a-z?!.:#~]{0,60}"
}

fn arb_control() -> impl Strategy<Value = DigitalControl> {
    prop::sample::select(DigitalControl::ALL.to_vec())
}

proptest! {
    #[test]
    fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Rgb::new(r, g, b);
        prop_assert_eq!(Rgb::from_hex(color.to_hex()), color);
        prop_assert!(color.to_hex() <= 0xFF_FFFF);
    }

    #[test]
    fn compose_is_idempotent(phrase in arb_phrase()) {
        let charset = Charset::builtin();
        prop_assert_eq!(compose(&charset, &phrase), compose(&charset, &phrase));
    }

    #[test]
    fn compose_width_law(phrase in arb_phrase()) {
        let charset = Charset::builtin();
        let expected: usize = phrase
            .chars()
            .filter_map(|c| charset.get(c))
            .map(|glyph| glyph.width() as usize + 1)
            .sum();

        let buffer = compose(&charset, &phrase).unwrap();
        prop_assert_eq!(buffer.width(), expected);
        prop_assert_eq!(buffer.height(), 5);
    }

    #[test]
    fn compose_skips_unknown(phrase in arb_phrase()) {
        let charset = Charset::builtin();
        let known: String = phrase.chars().filter(|c| charset.contains(*c)).collect();
        prop_assert_eq!(compose(&charset, &phrase), compose(&charset, &known));
    }

    #[test]
    fn one_event_per_press_edge(
        control in arb_control(),
        levels in prop::collection::vec(0u8..=1, 0..64),
    ) {
        let mut state = ControlState::default();
        let mut fired = 0;
        for &level in &levels {
            let (next, event) = state.observe_digital(control, level);
            state = next;
            if let Some(event) = event {
                prop_assert_eq!(event, ControlEvent::Pressed(control));
                fired += 1;
            }
        }

        // Every 0 that follows a 1 (or the released start) is an edge
        let edges = levels
            .iter()
            .scan(1u8, |previous, &level| {
                let edge = level == 0 && *previous != 0;
                *previous = level;
                Some(edge)
            })
            .filter(|edge| *edge)
            .count();
        prop_assert_eq!(fired, edges);
        prop_assert_eq!(state.is_pressed(control), levels.last() == Some(&0));
    }

    #[test]
    fn analog_fires_on_every_change(samples in prop::collection::vec(any::<u16>(), 0..64)) {
        let mut state = ControlState::new(0, 0);
        let mut previous = 0u16;
        for &sample in &samples {
            let (next, event) = state.observe_analog(AnalogControl::Microphone, sample);
            state = next;
            let expected = (sample != previous)
                .then_some(ControlEvent::Changed(AnalogControl::Microphone, sample));
            prop_assert_eq!(event, expected);
            previous = sample;
        }
        prop_assert_eq!(state.last_value(AnalogControl::Microphone), previous);
        prop_assert_eq!(state.last_value(AnalogControl::Dial), 0);
    }
}
