//! avatar - Placeholder avatar generator
//!
//! Picks a background colour from a seed, paints one of four procedural
//! styles onto a square canvas, overlays centered text and writes a PNG.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{AvatarError, Result};
pub use render::{
    avatar_file_name, encode_png, save_avatar, write_png, Canvas, FontRasterizer, RenderEngine,
    TextRasterizer,
};
pub use types::{clamp_channel, pick, pick_entry, pick_index, stable_hash, Colour, PaletteColour, Style};
