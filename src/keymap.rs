//! The four-layer key table for the GMMK Pro rev1 ANSI.
//!
//! The table is indexed `[layer][row][col]` and consumed by the host
//! firmware's key resolution on every matrix scan. Positions with no
//! physical key hold `a!(No)` on every layer; all other non-base cells are
//! `a!(Transparent)` unless the layer overrides them.

use strum::FromRepr;

use crate::action::{EncoderAction, KeyAction};
use crate::{a, k, layer, mo, tg};

pub const COL: usize = 15;
pub const ROW: usize = 6;
pub const NUM_LAYER: usize = 4;

/// The four keymap layers, in stack order. The host firmware tracks which
/// layers are active; this crate only ever sees the highest active one.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Base ANSI map.
    Default = 0,
    /// Swapped GUI/Alt for macOS, toggled from the function layer.
    MacOs = 1,
    /// Media, RGB and firmware controls on the Fn key.
    Func = 2,
    /// Keypad overlay on the right hand, momentary on the caps position.
    NumPad = 3,
}

// Physical grid, 6 rows x 15 columns:
//
//   Esc   F1    F2    F3    F4    F5    F6    F7    F8    F9    F10   F11   F12   Del          Rotary(Play)
//   ~     1     2     3     4     5     6     7     8     9     0     -     =     BackSpc      Home
//   Tab   Q     W     E     R     T     Y     U     I     O     P     [     ]     \            End
//   Caps  A     S     D     F     G     H     J     K     L     ;     "           Enter        PgUp
//   Sh_L        Z     X     C     V     B     N     M     ,     .     ?           Sh_R   Up    PgDn
//   Ct_L  Win_L Alt_L                   Space                   Alt_R Fn    Ct_R  Left   Down  Right
//
// The caps position is a momentary to the keypad layer and caps lock moved
// to Fn+Caps; the nav column is remapped (Print->Del, Del->Home, PgUp->End,
// PgDn->PgUp, End->PgDn). Fn+\ enters the bootloader without opening the
// case. Fn+N toggles between 6KRO and NKRO; the host firmware persists that
// choice to EEPROM across restarts.
#[rustfmt::skip]
const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layer!([
        [k!(Escape),  k!(F1),    k!(F2),    k!(F3),  k!(F4),  k!(F5),  k!(F6),    k!(F7),    k!(F8),    k!(F9),     k!(F10),  k!(F11),      k!(F12),       k!(Delete),     k!(MediaPlayPause)],
        [k!(Grave),   k!(Kc1),   k!(Kc2),   k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6),   k!(Kc7),   k!(Kc8),   k!(Kc9),    k!(Kc0),  k!(Minus),    k!(Equal),     k!(Backspace),  k!(Home)],
        [k!(Tab),     k!(Q),     k!(W),     k!(E),   k!(R),   k!(T),   k!(Y),     k!(U),     k!(I),     k!(O),      k!(P),    k!(LeftBracket), k!(RightBracket), k!(Backslash), k!(End)],
        [mo!(3),      k!(A),     k!(S),     k!(D),   k!(F),   k!(G),   k!(H),     k!(J),     k!(K),     k!(L),      k!(Semicolon), k!(Quote), a!(No),       k!(Enter),      k!(PageUp)],
        [k!(LShift),  a!(No),    k!(Z),     k!(X),   k!(C),   k!(V),   k!(B),     k!(N),     k!(M),     k!(Comma),  k!(Dot),  k!(Slash),    k!(RShift),    k!(Up),         k!(PageDown)],
        [k!(LCtrl),   k!(LGui),  k!(LAlt),  a!(No),  a!(No),  a!(No),  k!(Space), a!(No),    a!(No),    k!(RAlt),   mo!(2),   k!(RCtrl),    k!(Left),      k!(Down),       k!(Right)]
    ]),
    layer!([
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No),          a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(No),          a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), k!(LAlt),        k!(LGui),        a!(No),          a!(No),          a!(No),          a!(Transparent), a!(No),          a!(No),          k!(RGui),        a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
    ]),
    layer!([
        [a!(Transparent), a!(Transparent), a!(Transparent), k!(AudioVolDown), k!(AudioVolUp), k!(Calculator), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), k!(AudioMute), a!(Transparent), a!(Transparent), k!(MagicToggleGui), tg!(1),        a!(Transparent)],
        [a!(Transparent), k!(RgbTog),      a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), k!(RgbVai),      a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Bootloader),  a!(Transparent)],
        [k!(CapsLock),    a!(Transparent), k!(RgbVad),      a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No),          a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(No),          a!(Transparent), k!(RgbHui),      a!(Transparent), a!(Transparent), a!(Transparent), k!(MagicToggleNkro), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(RgbModeForward), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(No),          a!(No),          a!(No),          a!(Transparent), a!(No),          a!(No),          a!(Transparent), a!(Transparent), a!(Transparent), k!(RgbSpd),      k!(RgbModeReverse), k!(RgbSpi)]
    ]),
    layer!([
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(PrintScreen), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(KpSlash),     k!(KpAsterisk),  k!(KpMinus),     k!(KpPlus),      k!(NumLock),     a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Kp7),         k!(Kp8),         k!(Kp9),         a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Kp4),         k!(Kp5),         k!(Kp6),         a!(Transparent), a!(Transparent), a!(No),          a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(No),          a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Kp1),         k!(Kp2),         k!(Kp3),         a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(No),          a!(No),          a!(No),          a!(Transparent), a!(No),          a!(No),          k!(Kp0),         k!(KpEnter),     a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
    ]),
];

/// The rotary encoder emits F18/F19 taps, picked up host-side as
/// volume-knob bindings. The pair is layer independent.
pub const ENCODER_ACTIONS: EncoderAction = crate::encoder!(k!(F18), k!(F19));

pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    KEYMAP
}
