#![allow(dead_code)]

use gmmk_pro_keymap::encoder::KeyReporter;
use gmmk_pro_keymap::indicator::{RgbFrame, paint_indicators};
use gmmk_pro_keymap::keycode::KeyCode;
use gmmk_pro_keymap::keymap::Layer;
use gmmk_pro_keymap::led_indicator::LedIndicator;
use gmmk_pro_keymap::rgb_matrix::{LED_COUNT, LedIndex, RGB8};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Frame buffer double that records every indicator write; untouched slots
/// stay `None`.
pub struct FrameBuffer {
    pub colors: [Option<RGB8>; LED_COUNT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            colors: [None; LED_COUNT],
        }
    }

    pub fn color_of(&self, led: LedIndex) -> Option<RGB8> {
        self.colors[led as usize]
    }
}

impl RgbFrame for FrameBuffer {
    fn set_color(&mut self, index: u8, color: RGB8) {
        self.colors[index as usize] = Some(color);
    }
}

/// Paint one frame over the whole LED window.
pub fn paint_full(layer: Layer, indicators: LedIndicator) -> FrameBuffer {
    let mut frame = FrameBuffer::new();
    paint_indicators(&mut frame, 0, (LED_COUNT - 1) as u8, layer, indicators);
    frame
}

/// Key reporter double that records emitted taps in order.
pub struct TapRecorder {
    pub taps: Vec<KeyCode>,
}

impl TapRecorder {
    pub fn new() -> Self {
        Self { taps: Vec::new() }
    }
}

impl KeyReporter for TapRecorder {
    fn tap(&mut self, key: KeyCode) {
        self.taps.push(key);
    }
}
