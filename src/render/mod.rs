//! Rendering module for avatars.
//!
//! This module paints style backgrounds onto a square canvas, overlays
//! centered text and encodes the result as PNG.

mod canvas;
mod engine;
pub mod paint;
mod png;
pub mod text;

pub use canvas::Canvas;
pub use engine::RenderEngine;
pub use png::{avatar_file_name, encode_png, save_avatar, unique_id, write_png};
pub use text::{draw_centered_text, FontRasterizer, GlyphBitmap, TextLayout, TextRasterizer};
