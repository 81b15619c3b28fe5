//! Text measurement, glyph rasterization and the centered text overlay.

use std::fmt;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};

use crate::error::{AvatarError, Result};
use crate::types::Colour;

use super::Canvas;

/// Font size as a fraction of the canvas edge.
pub const TEXT_SCALE: f32 = 0.4;

/// Bold sans-serif fonts tried, in order, when no font path is configured.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// A rasterized glyph, positioned relative to the top-left of its layout.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBitmap {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage values, `width * height` long.
    pub coverage: Vec<u8>,
}

/// Measured and rasterized line of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    pub width: f32,
    pub height: f32,
    pub glyphs: Vec<GlyphBitmap>,
}

/// Font metrics and glyph rendering used by the text overlay.
pub trait TextRasterizer {
    /// Lay out a single line of `text` at `px_size` pixels.
    fn layout(&self, text: &str, px_size: f32) -> TextLayout;

    /// Width and height of the rendered text box.
    fn measure(&self, text: &str, px_size: f32) -> (f32, f32) {
        let layout = self.layout(text, px_size);
        (layout.width, layout.height)
    }
}

/// `fontdue`-backed rasterizer for a single TrueType/OpenType font.
pub struct FontRasterizer {
    font: Font,
    source: Option<PathBuf>,
}

impl FontRasterizer {
    /// Load a font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|e| {
            AvatarError::Font {
                message: format!("Failed to parse font: {}", e),
                help: Some("Use a TrueType (.ttf) or OpenType (.otf) font".to_string()),
            }
        })?;

        Ok(Self { font, source: None })
    }

    /// Load a font from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| AvatarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read font: {}", e),
        })?;

        let mut rasterizer = Self::from_bytes(&bytes)?;
        rasterizer.source = Some(path.to_path_buf());
        Ok(rasterizer)
    }

    /// Load `path` if given, otherwise the first available system font.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }

        let found = SYSTEM_FONT_CANDIDATES
            .iter()
            .map(Path::new)
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| AvatarError::Font {
                message: "No bold sans-serif system font found".to_string(),
                help: Some("Pass --font <PATH> or set `font:` in avatar.yaml".to_string()),
            })?;

        log::debug!("using system font {}", found.display());
        Self::from_path(found)
    }

    /// File the font was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl fmt::Debug for FontRasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRasterizer")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl TextRasterizer for FontRasterizer {
    fn layout(&self, text: &str, px_size: f32) -> TextLayout {
        let (ascent, descent) = self
            .font
            .horizontal_line_metrics(px_size)
            .map(|m| (m.ascent, m.descent))
            .unwrap_or((px_size, 0.0));
        let baseline = ascent.round() as i32;

        let mut pen = 0.0f32;
        let mut previous: Option<char> = None;
        let mut glyphs = Vec::with_capacity(text.len());

        for ch in text.chars() {
            if let Some(prev) = previous {
                pen += self.font.horizontal_kern(prev, ch, px_size).unwrap_or(0.0);
            }

            let (metrics, coverage) = self.font.rasterize(ch, px_size);
            if metrics.width > 0 && metrics.height > 0 {
                glyphs.push(GlyphBitmap {
                    x: pen.round() as i32 + metrics.xmin,
                    y: baseline - (metrics.ymin + metrics.height as i32),
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                });
            }

            pen += metrics.advance_width;
            previous = Some(ch);
        }

        TextLayout {
            width: pen,
            height: ascent - descent,
            glyphs,
        }
    }
}

/// Whether `text` would draw anything.
pub fn has_visible_text(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

/// Draw `text` centered on the canvas in solid white.
///
/// Blank or missing text is a no-op. The font size is `0.4 * edge`, and the
/// text box's top-left is placed at `((edge - w) / 2, (edge - h) / 2)`,
/// snapped to the pixel grid.
pub fn draw_centered_text(canvas: &mut Canvas, text: Option<&str>, rasterizer: &dyn TextRasterizer) {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return;
    };

    let edge = canvas.edge_length() as f32;
    let layout = rasterizer.layout(text, edge * TEXT_SCALE);
    let origin_x = ((edge - layout.width) / 2.0).round() as i32;
    let origin_y = ((edge - layout.height) / 2.0).round() as i32;

    for glyph in layout.glyphs.iter().filter(|g| g.width > 0) {
        for (row, line) in glyph.coverage.chunks(glyph.width).enumerate() {
            for (col, &coverage) in line.iter().enumerate() {
                canvas.blend_coverage(
                    origin_x + glyph.x + col as i32,
                    origin_y + glyph.y + row as i32,
                    Colour::WHITE,
                    coverage,
                );
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Rasterizer that draws every non-space character as a solid box.
    ///
    /// Boxes are half the font size wide and the full size tall, advancing
    /// by 0.6 of the size.
    pub struct BlockRasterizer;

    impl TextRasterizer for BlockRasterizer {
        fn layout(&self, text: &str, px_size: f32) -> TextLayout {
            let advance = px_size * 0.6;
            let width = (px_size * 0.5).round() as usize;
            let height = px_size.round() as usize;

            let glyphs = text
                .chars()
                .enumerate()
                .filter(|(_, c)| !c.is_whitespace())
                .map(|(i, _)| GlyphBitmap {
                    x: (i as f32 * advance).round() as i32,
                    y: 0,
                    width,
                    height,
                    coverage: vec![255; width * height],
                })
                .collect();

            TextLayout {
                width: text.chars().count() as f32 * advance,
                height: px_size,
                glyphs,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::BlockRasterizer;
    use super::*;
    use pretty_assertions::assert_eq;

    fn blue_canvas(edge: i32) -> Canvas {
        let mut canvas = Canvas::new(edge).unwrap();
        canvas.fill(Colour::rgb(52, 152, 219));
        canvas
    }

    #[test]
    fn test_blank_text_is_noop() {
        let reference = blue_canvas(50);
        for text in [None, Some(""), Some("   "), Some("\t\n")] {
            let mut canvas = blue_canvas(50);
            draw_centered_text(&mut canvas, text, &BlockRasterizer);
            assert_eq!(canvas.as_image(), reference.as_image());
        }
    }

    #[test]
    fn test_single_glyph_is_centered() {
        // edge 100 -> size 40, box 24x40, glyph 20x40
        let mut canvas = blue_canvas(100);
        draw_centered_text(&mut canvas, Some("A"), &BlockRasterizer);

        // origin = ((100 - 24) / 2, (100 - 40) / 2) = (38, 30)
        assert_eq!(canvas.pixel(38, 30), Colour::WHITE);
        assert_eq!(canvas.pixel(57, 69), Colour::WHITE);
        assert_eq!(canvas.pixel(37, 30), Colour::rgb(52, 152, 219));
        assert_eq!(canvas.pixel(58, 50), Colour::rgb(52, 152, 219));
        assert_eq!(canvas.pixel(38, 29), Colour::rgb(52, 152, 219));
        assert_eq!(canvas.pixel(38, 70), Colour::rgb(52, 152, 219));
    }

    #[test]
    fn test_text_box_is_symmetric() {
        let mut canvas = blue_canvas(100);
        draw_centered_text(&mut canvas, Some("JD"), &BlockRasterizer);

        let white: Vec<(u32, u32)> = (0..100)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Colour::WHITE)
            .collect();
        let min_y = white.iter().map(|p| p.1).min().unwrap();
        let max_y = white.iter().map(|p| p.1).max().unwrap();
        assert_eq!(min_y + max_y, 99);
    }

    #[test]
    fn test_text_wider_than_canvas_is_clipped() {
        let mut canvas = blue_canvas(10);
        draw_centered_text(&mut canvas, Some("WWWWWWWWWW"), &BlockRasterizer);
        assert_eq!(canvas.edge_length(), 10);
    }

    #[test]
    fn test_measure_defaults_to_layout() {
        let (w, h) = BlockRasterizer.measure("AB", 10.0);
        assert!((w - 12.0).abs() < 1e-4);
        assert!((h - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_has_visible_text() {
        assert!(!has_visible_text(None));
        assert!(!has_visible_text(Some(" ")));
        assert!(has_visible_text(Some(" a ")));
    }

    #[test]
    fn test_font_from_invalid_bytes() {
        let err = FontRasterizer::from_bytes(b"definitely not a font").unwrap_err();
        assert!(matches!(err, AvatarError::Font { .. }));
    }

    #[test]
    fn test_font_from_missing_path() {
        let err = FontRasterizer::discover(Some(Path::new("/nonexistent/font.ttf"))).unwrap_err();
        assert!(matches!(err, AvatarError::Io { .. }));
    }

    #[test]
    fn test_system_font_layout_when_available() {
        let Ok(font) = FontRasterizer::discover(None) else {
            return;
        };

        let layout = font.layout("JD", 40.0);
        assert!(layout.width > 0.0);
        assert!(layout.height > 0.0);
        assert_eq!(layout.glyphs.len(), 2);
        for glyph in &layout.glyphs {
            assert_eq!(glyph.coverage.len(), glyph.width * glyph.height);
        }
    }
}
