//! PNG output for rendered avatars.
//!
//! Encodes canvases to PNG and writes them under unique file names.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use rand::Rng;

use crate::error::{AvatarError, Result};
use crate::types::Style;

use super::Canvas;

/// Encode a canvas as PNG bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    canvas
        .as_image()
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| AvatarError::Encode {
            message: format!("Failed to encode PNG: {}", e),
        })?;

    Ok(bytes.into_inner())
}

/// Write a canvas to a PNG file.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let bytes = encode_png(canvas)?;

    fs::write(path, bytes).map_err(|e| AvatarError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

/// Random 128-bit id formatted as hyphenated 8-4-4-4-12 hex.
pub fn unique_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let hex = format!("{:032x}", rng.gen::<u128>());
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// File name for an avatar: `avatar[_pattern|_mosaic|_tradingbars]_{id}.png`.
pub fn avatar_file_name(style: Style, id: &str) -> String {
    format!("avatar{}_{}.png", style.file_suffix(), id)
}

/// Write `canvas` into `dir` under a fresh unique name.
///
/// Creates `dir` if needed and returns the full path of the written file.
pub fn save_avatar<R: Rng + ?Sized>(
    canvas: &Canvas,
    style: Style,
    dir: &Path,
    rng: &mut R,
) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| AvatarError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let path = dir.join(avatar_file_name(style, &unique_id(rng)));
    write_png(canvas, &path)?;

    log::info!("wrote {}", path.display());
    Ok(path)
}
