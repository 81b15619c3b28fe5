//! Render engine - paints a style and overlays centered text.

use rand::rngs::mock::StepRng;
use rand::Rng;

use crate::error::Result;
use crate::types::{Colour, Style};

use super::paint::{paint_bars, paint_flat, paint_mosaic, paint_pattern};
use super::text::{draw_centered_text, has_visible_text, TextRasterizer};
use super::Canvas;

/// Paints avatar canvases.
///
/// The engine holds no mutable state. Randomness comes from the source
/// passed to each call, so a seeded source gives reproducible output.
#[derive(Clone, Copy)]
pub struct RenderEngine<'a> {
    rasterizer: Option<&'a dyn TextRasterizer>,
}

impl<'a> RenderEngine<'a> {
    /// Create an engine that draws text with `rasterizer`.
    pub fn new(rasterizer: &'a dyn TextRasterizer) -> Self {
        Self {
            rasterizer: Some(rasterizer),
        }
    }

    /// Create an engine with no text support. Text arguments are ignored.
    pub fn without_text() -> Self {
        Self { rasterizer: None }
    }

    /// Render `style` onto a new `edge_length` square canvas.
    ///
    /// Fails only with `InvalidDimension` when `edge_length <= 0`.
    pub fn render<R: Rng + ?Sized>(
        &self,
        style: Style,
        background: Colour,
        text: Option<&str>,
        edge_length: i32,
        rng: &mut R,
    ) -> Result<Canvas> {
        let mut canvas = Canvas::new(edge_length)?;
        canvas.set_antialias(style.antialias());

        match style {
            Style::Flat => paint_flat(&mut canvas, background),
            Style::Pattern => paint_pattern(&mut canvas, background, rng),
            Style::Mosaic => paint_mosaic(&mut canvas, background, rng),
            Style::Bars => paint_bars(&mut canvas, background, rng),
        }

        self.overlay_text(&mut canvas, text);

        log::debug!(
            "rendered {} avatar {}x{} on {}",
            style,
            edge_length,
            edge_length,
            background
        );

        Ok(canvas)
    }

    /// Solid background with optional text. Output depends only on the inputs.
    pub fn render_flat(&self, background: Colour, text: Option<&str>, edge_length: i32) -> Result<Canvas> {
        // Flat never samples, so any source works.
        self.render(Style::Flat, background, text, edge_length, &mut StepRng::new(0, 0))
    }

    /// Soft ellipse pattern with optional text.
    pub fn render_pattern<R: Rng + ?Sized>(
        &self,
        background: Colour,
        text: Option<&str>,
        edge_length: i32,
        rng: &mut R,
    ) -> Result<Canvas> {
        self.render(Style::Pattern, background, text, edge_length, rng)
    }

    /// Tiled mosaic with optional text.
    pub fn render_mosaic<R: Rng + ?Sized>(
        &self,
        background: Colour,
        text: Option<&str>,
        edge_length: i32,
        rng: &mut R,
    ) -> Result<Canvas> {
        self.render(Style::Mosaic, background, text, edge_length, rng)
    }

    /// Vertical bars with optional text.
    pub fn render_bars<R: Rng + ?Sized>(
        &self,
        background: Colour,
        text: Option<&str>,
        edge_length: i32,
        rng: &mut R,
    ) -> Result<Canvas> {
        self.render(Style::Bars, background, text, edge_length, rng)
    }

    fn overlay_text(&self, canvas: &mut Canvas, text: Option<&str>) {
        if !has_visible_text(text) {
            return;
        }

        match self.rasterizer {
            Some(rasterizer) => draw_centered_text(canvas, text, rasterizer),
            None => log::warn!("no font configured, skipping avatar text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AvatarError;
    use crate::render::text::testing::BlockRasterizer;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BLUE: Colour = Colour::rgb(52, 152, 219);

    #[test]
    fn test_every_style_is_square() {
        let engine = RenderEngine::new(&BlockRasterizer);
        let mut rng = StdRng::seed_from_u64(10);

        for style in Style::ALL {
            for edge in [1, 2, 9, 10, 19, 20, 57, 100, 128] {
                let canvas = engine.render(style, BLUE, Some("JD"), edge, &mut rng).unwrap();
                assert_eq!(canvas.as_image().dimensions(), (edge as u32, edge as u32));
            }
        }
    }

    #[test]
    fn test_every_style_rejects_non_positive_edge() {
        let engine = RenderEngine::new(&BlockRasterizer);
        let mut rng = StdRng::seed_from_u64(11);

        for style in Style::ALL {
            for edge in [0, -1, -500] {
                let err = engine.render(style, BLUE, None, edge, &mut rng).unwrap_err();
                assert!(matches!(err, AvatarError::InvalidDimension { value } if value == edge));
            }
        }
    }

    #[test]
    fn test_flat_is_deterministic() {
        let engine = RenderEngine::new(&BlockRasterizer);
        let a = engine.render_flat(BLUE, Some("JD"), 80).unwrap();
        let b = engine.render_flat(BLUE, Some("JD"), 80).unwrap();
        assert_eq!(a.as_image(), b.as_image());
    }

    #[test]
    fn test_flat_without_text_is_solid() {
        let canvas = RenderEngine::without_text().render_flat(BLUE, None, 16).unwrap();
        assert!(canvas.pixels().all(|p| p == BLUE));
    }

    #[test]
    fn test_flat_text_is_white_and_centered() {
        let engine = RenderEngine::new(&BlockRasterizer);
        let canvas = engine.render_flat(BLUE, Some("A"), 100).unwrap();
        assert_eq!(canvas.pixel(50, 50), Colour::WHITE);
        assert_eq!(canvas.pixel(5, 5), BLUE);
    }

    #[test]
    fn test_blank_text_matches_no_text() {
        let engine = RenderEngine::new(&BlockRasterizer);

        for style in Style::ALL {
            let reference = engine
                .render(style, BLUE, None, 60, &mut StdRng::seed_from_u64(12))
                .unwrap();

            for text in ["", " ", "\t \n"] {
                let canvas = engine
                    .render(style, BLUE, Some(text), 60, &mut StdRng::seed_from_u64(12))
                    .unwrap();
                assert_eq!(canvas.as_image(), reference.as_image(), "{style} with {text:?}");
            }
        }
    }

    #[test]
    fn test_missing_rasterizer_skips_text() {
        let engine = RenderEngine::without_text();
        let with_text = engine.render_flat(BLUE, Some("JD"), 40).unwrap();
        let without = engine.render_flat(BLUE, None, 40).unwrap();
        assert_eq!(with_text.as_image(), without.as_image());
    }

    #[test]
    fn test_seeded_random_source_is_reproducible() {
        let engine = RenderEngine::new(&BlockRasterizer);

        for style in [Style::Pattern, Style::Mosaic, Style::Bars] {
            let a = engine
                .render(style, BLUE, Some("JD"), 90, &mut StdRng::seed_from_u64(42))
                .unwrap();
            let b = engine
                .render(style, BLUE, Some("JD"), 90, &mut StdRng::seed_from_u64(42))
                .unwrap();
            assert_eq!(a.as_image(), b.as_image(), "{style}");
        }
    }

    #[test]
    fn test_procedural_styles_stay_opaque_on_extreme_colours() {
        let engine = RenderEngine::new(&BlockRasterizer);
        let mut rng = StdRng::seed_from_u64(13);

        for background in [Colour::BLACK, Colour::WHITE, Colour::rgb(241, 196, 15)] {
            for style in [Style::Pattern, Style::Mosaic, Style::Bars] {
                let canvas = engine
                    .render(style, background, Some("Z"), 50, &mut rng)
                    .unwrap();
                assert!(canvas.pixels().all(|p| p.is_opaque()), "{style}");
            }
        }
    }

    #[test]
    fn test_text_is_drawn_last() {
        let engine = RenderEngine::new(&BlockRasterizer);
        let mut rng = StdRng::seed_from_u64(14);

        for style in Style::ALL {
            let canvas = engine.render(style, BLUE, Some("A"), 100, &mut rng).unwrap();
            assert_eq!(canvas.pixel(50, 50), Colour::WHITE, "{style}");
        }
    }

    #[test]
    fn test_mosaic_disables_antialias() {
        let mut rng = StdRng::seed_from_u64(15);
        let engine = RenderEngine::without_text();
        assert!(!engine.render_mosaic(BLUE, None, 20, &mut rng).unwrap().antialias());
        assert!(engine.render_pattern(BLUE, None, 20, &mut rng).unwrap().antialias());
        assert!(engine.render_bars(BLUE, None, 20, &mut rng).unwrap().antialias());
    }
}
