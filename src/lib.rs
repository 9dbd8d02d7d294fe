//! Custom keymap for the GMMK Pro rev1 ANSI.
//!
//! The host firmware owns matrix scanning, debouncing, HID reporting,
//! layer-stack resolution and the RGB frame flush. This crate supplies the
//! data the firmware consumes at build time (the four-layer key table and
//! the LED wiring/region/color tables) plus the two callbacks it invokes
//! from its own loop:
//!
//! - [`indicator::paint_indicators`] - per-frame RGB indicator overlay
//! - [`encoder::on_encoder_twist`] - rotary encoder detent handler

#![no_std]

pub mod action;
pub mod encoder;
pub mod indicator;
pub mod keycode;
pub mod keymap;
pub mod layout_macro;
pub mod led_indicator;
pub mod rgb_matrix;

#[cfg(feature = "defmt")]
pub(crate) mod fmt {
    pub use defmt::debug;
}

#[cfg(not(feature = "defmt"))]
pub(crate) mod fmt {
    pub use log::debug;
}
