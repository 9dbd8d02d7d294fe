//! Key actions stored in the keymap.
//!
//! An [`Action`] is a single operation the firmware executes; a
//! [`KeyAction`] is what a keymap cell holds. This board's map only uses
//! single actions (plain keys, momentary/toggle layer markers) plus the
//! `No`/`Transparent` cell markers. The layer-stack resolution that gives
//! those markers meaning lives in the host firmware.

use crate::keycode::KeyCode;

/// EncoderAction is the action pair at an encoder position: one action per
/// rotation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyAction,
    counter_clockwise: KeyAction,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self {
            clockwise: KeyAction::No,
            counter_clockwise: KeyAction::No,
        }
    }
}

impl EncoderAction {
    /// Create a new encoder action.
    pub const fn new(clockwise: KeyAction, counter_clockwise: KeyAction) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    /// Get the clockwise action.
    pub const fn clockwise(&self) -> KeyAction {
        self.clockwise
    }

    /// Get the counter clockwise action.
    pub const fn counter_clockwise(&self) -> KeyAction {
        self.counter_clockwise
    }
}

/// A KeyAction is the action at a keyboard position, stored in the keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action. Used to pad grid positions with no physical key.
    No,
    /// Transparent action, the next active layer below is checked.
    /// The base layer never holds this marker, so every position resolves.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`. Returns `Action::No`
    /// for the cell markers.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            _ => Action::No,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

/// A single basic action that the firmware executes for a key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, the next active layer below is checked.
    Transparent,
    /// A normal key stroke, for every keycode defined in the `KeyCode` enum.
    Key(KeyCode),
    /// Activate a layer while the key is held.
    LayerOn(u8),
    /// Toggle a layer on key press.
    LayerToggle(u8),
}
