//! LED wiring map, region groupings and indicator colors.
//!
//! `LedIndex` follows the board's wiring order, not the visual layout: the
//! controller chains down columns left to right, interleaving the side
//! panel LEDs from index 67 on. The region arrays below group indices for
//! batch painting; regions may overlap and the painting callback resolves
//! overlap purely by write order.

pub use smart_leds::RGB8;

/// Physical LED count of the rev1 ANSI board: 82 per-key LEDs plus 8 side
/// panel LEDs per edge.
pub const LED_COUNT: usize = 98;

/// One variant per physical LED position, discriminant = wiring index.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedIndex {
    Esc = 0,
    Grave = 1,
    Tab = 2,
    Caps = 3,
    LShift = 4,
    LCtrl = 5,
    F1 = 6,
    Kc1 = 7,
    Q = 8,
    A = 9,
    Z = 10,
    LWin = 11,
    F2 = 12,
    Kc2 = 13,
    W = 14,
    S = 15,
    X = 16,
    LAlt = 17,
    F3 = 18,
    Kc3 = 19,
    E = 20,
    D = 21,
    C = 22,
    F4 = 23,
    Kc4 = 24,
    R = 25,
    F = 26,
    V = 27,
    F5 = 28,
    Kc5 = 29,
    T = 30,
    G = 31,
    B = 32,
    Space = 33,
    F6 = 34,
    Kc6 = 35,
    Y = 36,
    H = 37,
    N = 38,
    F7 = 39,
    Kc7 = 40,
    U = 41,
    J = 42,
    M = 43,
    F8 = 44,
    Kc8 = 45,
    I = 46,
    K = 47,
    Comma = 48,
    RAlt = 49,
    F9 = 50,
    Kc9 = 51,
    O = 52,
    L = 53,
    Dot = 54,
    Fn = 55,
    F10 = 56,
    Kc0 = 57,
    P = 58,
    Semicolon = 59,
    Slash = 60,
    F11 = 61,
    Minus = 62,
    LBracket = 63,
    Quote = 64,
    RCtrl = 65,
    F12 = 66,
    L1 = 67,
    R1 = 68,
    Del = 69,
    L2 = 70,
    R2 = 71,
    Home = 72,
    L3 = 73,
    R3 = 74,
    PgUp = 75,
    L4 = 76,
    R4 = 77,
    Equal = 78,
    Right = 79,
    L5 = 80,
    R5 = 81,
    End = 82,
    L6 = 83,
    R6 = 84,
    Backspace = 85,
    PgDn = 86,
    L7 = 87,
    R7 = 88,
    RBracket = 89,
    RShift = 90,
    L8 = 91,
    R8 = 92,
    Backslash = 93,
    Up = 94,
    Left = 95,
    Enter = 96,
    Down = 97,
}

/// A single LED with a fixed color assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LedColor {
    pub led: LedIndex,
    pub color: RGB8,
}

pub const ACCENT_PURPLE: RGB8 = RGB8 { r: 194, g: 31, b: 234 };
pub const ACCENT_ORANGE: RGB8 = RGB8 { r: 255, g: 102, b: 0 };
pub const CAPS_LOCK_RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
/// The macOS layer keeps the stock accent on the sides.
pub const MACOS_ACCENT: RGB8 = ACCENT_PURPLE;
/// Uniform color for keypad positions while num lock is off.
pub const NUMPAD_INACTIVE: RGB8 = RGB8 { r: 255, g: 35, b: 35 };

/// Every per-key LED, visual order. Deliberately excludes the side panels.
#[rustfmt::skip]
pub const KEY_MATRIX: [LedIndex; 82] = [
    LedIndex::Esc,    LedIndex::F1,   LedIndex::F2,   LedIndex::F3,  LedIndex::F4,  LedIndex::F5,  LedIndex::F6,    LedIndex::F7,  LedIndex::F8,    LedIndex::F9,    LedIndex::F10,   LedIndex::F11,      LedIndex::F12,      LedIndex::Del,
    LedIndex::Grave,  LedIndex::Kc1,  LedIndex::Kc2,  LedIndex::Kc3, LedIndex::Kc4, LedIndex::Kc5, LedIndex::Kc6,   LedIndex::Kc7, LedIndex::Kc8,   LedIndex::Kc9,   LedIndex::Kc0,   LedIndex::Minus,    LedIndex::Equal,    LedIndex::Backspace, LedIndex::Home,
    LedIndex::Tab,    LedIndex::Q,    LedIndex::W,    LedIndex::E,   LedIndex::R,   LedIndex::T,   LedIndex::Y,     LedIndex::U,   LedIndex::I,     LedIndex::O,     LedIndex::P,     LedIndex::LBracket, LedIndex::RBracket, LedIndex::Backslash, LedIndex::PgUp,
    LedIndex::Caps,   LedIndex::A,    LedIndex::S,    LedIndex::D,   LedIndex::F,   LedIndex::G,   LedIndex::H,     LedIndex::J,   LedIndex::K,     LedIndex::L,     LedIndex::Semicolon, LedIndex::Quote, LedIndex::Enter,   LedIndex::PgDn,
    LedIndex::LShift, LedIndex::Z,    LedIndex::X,    LedIndex::C,   LedIndex::V,   LedIndex::B,   LedIndex::N,     LedIndex::M,   LedIndex::Comma, LedIndex::Dot,   LedIndex::Slash, LedIndex::RShift,   LedIndex::Up,       LedIndex::End,
    LedIndex::LCtrl,  LedIndex::LWin, LedIndex::LAlt, LedIndex::Space, LedIndex::RAlt, LedIndex::Fn, LedIndex::RCtrl, LedIndex::Left, LedIndex::Down, LedIndex::Right,
];

/// Left side panel strip, top to bottom.
pub const LEFT_SIDE: [LedIndex; 8] = [
    LedIndex::L1,
    LedIndex::L2,
    LedIndex::L3,
    LedIndex::L4,
    LedIndex::L5,
    LedIndex::L6,
    LedIndex::L7,
    LedIndex::L8,
];

/// Right side panel strip, top to bottom.
pub const RIGHT_SIDE: [LedIndex; 8] = [
    LedIndex::R1,
    LedIndex::R2,
    LedIndex::R3,
    LedIndex::R4,
    LedIndex::R5,
    LedIndex::R6,
    LedIndex::R7,
    LedIndex::R8,
];

/// Key positions the keypad layer overlays with digits and operators,
/// including the thumb-row zero and keypad-enter.
pub const NUMPAD_KEYS: [LedIndex; 11] = [
    LedIndex::U,
    LedIndex::I,
    LedIndex::O,
    LedIndex::J,
    LedIndex::K,
    LedIndex::L,
    LedIndex::M,
    LedIndex::Comma,
    LedIndex::Dot,
    LedIndex::RAlt,
    LedIndex::Fn,
];

/// The `/ * - +` positions on the number row, each with its own hint color
/// while the keypad layer is active and num lock is on.
pub const NUMPAD_FUNC: [LedColor; 4] = [
    LedColor { led: LedIndex::Kc7, color: RGB8 { r: 255, g: 255, b: 0 } },
    LedColor { led: LedIndex::Kc8, color: RGB8 { r: 0, g: 0, b: 255 } },
    LedColor { led: LedIndex::Kc9, color: RGB8 { r: 255, g: 0, b: 0 } },
    LedColor { led: LedIndex::Kc0, color: RGB8 { r: 0, g: 255, b: 0 } },
];

/// Painted green on the num-lock key position while the keypad layer is
/// active but num lock is off.
pub const NUM_LOCK_HINT: LedColor = LedColor {
    led: LedIndex::Minus,
    color: RGB8 { r: 0, g: 255, b: 0 },
};

/// Cluster around the caps-lock key, available for batch coloring.
pub const CAPS_SURROUND: [LedIndex; 8] = [
    LedIndex::Grave,
    LedIndex::Kc1,
    LedIndex::Tab,
    LedIndex::Q,
    LedIndex::Caps,
    LedIndex::A,
    LedIndex::LShift,
    LedIndex::LCtrl,
];
