pub mod common;

use gmmk_pro_keymap::indicator::paint_indicators;
use gmmk_pro_keymap::keymap::Layer;
use gmmk_pro_keymap::led_indicator::LedIndicator;
use gmmk_pro_keymap::rgb_matrix::{
    ACCENT_ORANGE, ACCENT_PURPLE, CAPS_LOCK_RED, KEY_MATRIX, LEFT_SIDE, MACOS_ACCENT,
    NUM_LOCK_HINT, NUMPAD_FUNC, NUMPAD_INACTIVE, NUMPAD_KEYS, RIGHT_SIDE,
};

use crate::common::{FrameBuffer, paint_full};

#[test]
fn base_frame_paints_accents() {
    let frame = paint_full(Layer::Default, LedIndicator::new());

    for led in KEY_MATRIX {
        assert_eq!(frame.color_of(led), Some(ACCENT_PURPLE));
    }
    for led in LEFT_SIDE.iter().chain(&RIGHT_SIDE) {
        assert_eq!(frame.color_of(*led), Some(ACCENT_ORANGE));
    }
    // The two regions together cover the whole board.
    assert!(frame.colors.iter().all(|slot| slot.is_some()));
}

#[test]
fn macos_layer_recolors_sides() {
    let frame = paint_full(Layer::MacOs, LedIndicator::new());

    for led in LEFT_SIDE.iter().chain(&RIGHT_SIDE) {
        assert_eq!(frame.color_of(*led), Some(MACOS_ACCENT));
    }
    // Key matrix keeps the base accent.
    for led in KEY_MATRIX {
        assert_eq!(frame.color_of(led), Some(ACCENT_PURPLE));
    }
}

#[test]
fn caps_lock_wins_on_every_layer() {
    for layer in [Layer::Default, Layer::MacOs, Layer::Func, Layer::NumPad] {
        for indicators in [
            LedIndicator::CAPS_LOCK,
            LedIndicator::CAPS_LOCK | LedIndicator::NUM_LOCK,
        ] {
            let frame = paint_full(layer, indicators);
            for led in LEFT_SIDE.iter().chain(&RIGHT_SIDE) {
                assert_eq!(frame.color_of(*led), Some(CAPS_LOCK_RED));
            }
        }
    }
}

#[test]
fn numpad_layer_with_num_lock_on() {
    let frame = paint_full(Layer::NumPad, LedIndicator::NUM_LOCK);

    for led in NUMPAD_KEYS {
        assert_eq!(frame.color_of(led), Some(ACCENT_ORANGE));
    }
    for hint in NUMPAD_FUNC {
        assert_eq!(frame.color_of(hint.led), Some(hint.color));
    }
}

#[test]
fn numpad_layer_with_num_lock_off() {
    let frame = paint_full(Layer::NumPad, LedIndicator::new());

    assert_eq!(
        frame.color_of(NUM_LOCK_HINT.led),
        Some(NUM_LOCK_HINT.color)
    );
    for led in NUMPAD_KEYS {
        assert_eq!(frame.color_of(led), Some(NUMPAD_INACTIVE));
    }
    for hint in NUMPAD_FUNC {
        assert_eq!(frame.color_of(hint.led), Some(NUMPAD_INACTIVE));
    }
}

#[test]
fn numpad_overlay_touches_only_its_regions() {
    let baseline = paint_full(Layer::Default, LedIndicator::NUM_LOCK);
    let overlaid = paint_full(Layer::NumPad, LedIndicator::NUM_LOCK);

    let allowed: Vec<u8> = NUMPAD_KEYS
        .iter()
        .map(|led| *led as u8)
        .chain(NUMPAD_FUNC.iter().map(|hint| hint.led as u8))
        .collect();

    for index in 0..baseline.colors.len() {
        if baseline.colors[index] != overlaid.colors[index] {
            assert!(
                allowed.contains(&(index as u8)),
                "unexpected write at LED {index}"
            );
        }
    }
}

#[test]
fn writes_outside_window_are_suppressed() {
    let mut frame = FrameBuffer::new();
    // Per-key LEDs only: every side panel index is 67 or above.
    paint_indicators(&mut frame, 0, 66, Layer::Default, LedIndicator::new());

    for led in LEFT_SIDE.iter().chain(&RIGHT_SIDE) {
        assert_eq!(frame.color_of(*led), None);
    }
    for led in KEY_MATRIX {
        if (led as u8) <= 66 {
            assert_eq!(frame.color_of(led), Some(ACCENT_PURPLE));
        } else {
            assert_eq!(frame.color_of(led), None);
        }
    }
}
