//! Rotary encoder detent handler.

use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::fmt::debug;
use crate::keycode::KeyCode;
use crate::keymap::ENCODER_ACTIONS;

/// One detected detent of the rotary input.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// A clockwise turn
    Clockwise,
    /// A counterclockwise turn
    CounterClockwise,
}

/// The host firmware's "emit key-code signal" primitive: a full press and
/// release reported within one scan.
pub trait KeyReporter {
    fn tap(&mut self, key: KeyCode);
}

/// Handle one encoder detent by tapping the mapped keycode.
///
/// Returns `true` when the detent was fully handled and the host
/// firmware's default encoder processing should be suppressed, which is
/// always; the encoder map has no fallthrough.
pub fn on_encoder_twist<R: KeyReporter>(reporter: &mut R, direction: Direction) -> bool {
    let action = match direction {
        Direction::Clockwise => ENCODER_ACTIONS.clockwise(),
        Direction::CounterClockwise => ENCODER_ACTIONS.counter_clockwise(),
    };
    if let Action::Key(key) = action.to_action() {
        debug!("encoder {:?} -> {:?}", direction, key);
        reporter.tap(key);
    }
    true
}
