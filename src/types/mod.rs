//! Core types for avatar generation.

mod colour;
pub mod palette;
mod style;

pub use colour::{clamp_channel, Colour};
pub use palette::{pick, pick_entry, pick_index, stable_hash, PaletteColour};
pub use style::Style;
