pub mod common;

use gmmk_pro_keymap::encoder::{Direction, on_encoder_twist};
use gmmk_pro_keymap::keycode::KeyCode;
use gmmk_pro_keymap::keymap::ENCODER_ACTIONS;
use gmmk_pro_keymap::{encoder, k};

use crate::common::TapRecorder;

#[test]
fn clockwise_taps_f18_once() {
    let mut reporter = TapRecorder::new();
    let handled = on_encoder_twist(&mut reporter, Direction::Clockwise);
    assert!(handled);
    assert_eq!(reporter.taps, [KeyCode::F18]);
}

#[test]
fn counter_clockwise_taps_f19_once() {
    let mut reporter = TapRecorder::new();
    let handled = on_encoder_twist(&mut reporter, Direction::CounterClockwise);
    assert!(handled);
    assert_eq!(reporter.taps, [KeyCode::F19]);
}

#[test]
fn detents_are_stateless() {
    let mut reporter = TapRecorder::new();
    for _ in 0..3 {
        on_encoder_twist(&mut reporter, Direction::Clockwise);
        on_encoder_twist(&mut reporter, Direction::CounterClockwise);
    }
    assert_eq!(reporter.taps.len(), 6);
    assert_eq!(
        reporter.taps,
        [
            KeyCode::F18,
            KeyCode::F19,
            KeyCode::F18,
            KeyCode::F19,
            KeyCode::F18,
            KeyCode::F19,
        ]
    );
}

#[test]
fn encoder_map_matches_macro_form() {
    assert_eq!(ENCODER_ACTIONS, encoder!(k!(F18), k!(F19)));
}
