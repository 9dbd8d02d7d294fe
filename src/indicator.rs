//! Per-frame RGB indicator overlay.
//!
//! The host firmware owns the LED frame buffer and flushes it after every
//! rendering frame; this module only overwrites color slots through the
//! firmware's set-color primitive. There is no blending and no read-back:
//! overlap between paint steps resolves by write order alone, so the caps
//! lock repaint must stay the last step.

use smart_leds::RGB8;

use crate::keymap::Layer;
use crate::led_indicator::LedIndicator;
use crate::rgb_matrix::{
    ACCENT_ORANGE, ACCENT_PURPLE, CAPS_LOCK_RED, KEY_MATRIX, LEFT_SIDE, LedIndex, MACOS_ACCENT,
    NUM_LOCK_HINT, NUMPAD_FUNC, NUMPAD_INACTIVE, NUMPAD_KEYS, RIGHT_SIDE,
};

/// The host firmware's frame buffer, exposed through its single write
/// primitive. Writes are unconditional; the buffer is never read back.
pub trait RgbFrame {
    fn set_color(&mut self, index: u8, color: RGB8);
}

/// Bounds writes to the `[led_min, led_max]` window the host firmware asks
/// to have repainted this frame.
struct Painter<'a, F: RgbFrame> {
    frame: &'a mut F,
    led_min: u8,
    led_max: u8,
}

impl<F: RgbFrame> Painter<'_, F> {
    fn set(&mut self, led: LedIndex, color: RGB8) {
        let index = led as u8;
        if self.led_min <= index && index <= self.led_max {
            self.frame.set_color(index, color);
        }
    }

    fn fill(&mut self, region: &[LedIndex], color: RGB8) {
        for &led in region {
            self.set(led, color);
        }
    }
}

/// Repaint the indicator overlay for one frame.
///
/// Invoked by the host firmware once per rendering frame with the inclusive
/// LED index window to repaint, the highest active layer and the host
/// keyboard LED state. Later steps overwrite earlier ones per index:
/// accents first, then layer coloring, then the lock-key overrides.
pub fn paint_indicators<F: RgbFrame>(
    frame: &mut F,
    led_min: u8,
    led_max: u8,
    highest_layer: Layer,
    indicators: LedIndicator,
) {
    let mut painter = Painter { frame, led_min, led_max };

    painter.fill(&KEY_MATRIX, ACCENT_PURPLE);
    painter.fill(&LEFT_SIDE, ACCENT_ORANGE);
    painter.fill(&RIGHT_SIDE, ACCENT_ORANGE);

    if highest_layer == Layer::MacOs {
        painter.fill(&LEFT_SIDE, MACOS_ACCENT);
        painter.fill(&RIGHT_SIDE, MACOS_ACCENT);
    }

    match highest_layer {
        Layer::NumPad => {
            if indicators.num_lock() {
                painter.fill(&NUMPAD_KEYS, ACCENT_ORANGE);
                for hint in &NUMPAD_FUNC {
                    painter.set(hint.led, hint.color);
                }
            } else {
                painter.set(NUM_LOCK_HINT.led, NUM_LOCK_HINT.color);
                painter.fill(&NUMPAD_KEYS, NUMPAD_INACTIVE);
                for hint in &NUMPAD_FUNC {
                    painter.set(hint.led, NUMPAD_INACTIVE);
                }
            }
        }
        // Other layers keep the plain accent coloring.
        _ => {}
    }

    if indicators.caps_lock() {
        painter.fill(&LEFT_SIDE, CAPS_LOCK_RED);
        painter.fill(&RIGHT_SIDE, CAPS_LOCK_RED);
    }
}
