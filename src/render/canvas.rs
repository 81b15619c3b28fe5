//! Square raster buffer that the avatar styles paint into.
//!
//! Pixels are stored unpremultiplied (RGBA8). Shapes are composited with
//! source-over blending; `fill` replaces pixels outright.

use image::{Pixel, Rgba, RgbaImage};

use crate::error::{AvatarError, Result};
use crate::types::Colour;

/// Supersampling grid per axis for anti-aliased shape edges.
const SUBSAMPLES: u32 = 4;

/// A square RGBA canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    antialias: bool,
}

impl Canvas {
    /// Create a transparent canvas of `edge_length` x `edge_length` pixels.
    ///
    /// Fails with `InvalidDimension` if `edge_length <= 0`, before anything
    /// is allocated.
    pub fn new(edge_length: i32) -> Result<Self> {
        if edge_length <= 0 {
            return Err(AvatarError::InvalidDimension { value: edge_length });
        }

        let edge = edge_length as u32;
        Ok(Self {
            image: RgbaImage::new(edge, edge),
            antialias: true,
        })
    }

    /// Side length in pixels.
    pub fn edge_length(&self) -> u32 {
        self.image.width()
    }

    /// Whether shape edges are anti-aliased.
    pub fn antialias(&self) -> bool {
        self.antialias
    }

    /// Enable or disable anti-aliased shape edges.
    pub fn set_antialias(&mut self, antialias: bool) {
        self.antialias = antialias;
    }

    /// Replace every pixel with `colour`.
    pub fn fill(&mut self, colour: Colour) {
        let rgba = Rgba::from(colour);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Composite a filled rectangle. Parts outside the canvas are clipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, colour: Colour) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, width, height) else {
            return;
        };

        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, colour, 255);
            }
        }
    }

    /// Composite a filled ellipse inscribed in the given bounding box.
    ///
    /// The box may extend past the canvas edges; the ellipse is clipped.
    pub fn fill_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32, colour: Colour) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, width, height) else {
            return;
        };

        let rx = width as f32 / 2.0;
        let ry = height as f32 / 2.0;
        let cx = x as f32 + rx;
        let cy = y as f32 + ry;
        let inside = |sx: f32, sy: f32| {
            let dx = (sx - cx) / rx;
            let dy = (sy - cy) / ry;
            dx * dx + dy * dy <= 1.0
        };

        for py in y0..y1 {
            for px in x0..x1 {
                let coverage = if self.antialias {
                    let mut hits = 0;
                    for sy in 0..SUBSAMPLES {
                        for sx in 0..SUBSAMPLES {
                            let fx = px as f32 + (sx as f32 + 0.5) / SUBSAMPLES as f32;
                            let fy = py as f32 + (sy as f32 + 0.5) / SUBSAMPLES as f32;
                            if inside(fx, fy) {
                                hits += 1;
                            }
                        }
                    }
                    (hits * 255 / (SUBSAMPLES * SUBSAMPLES)) as u8
                } else if inside(px as f32 + 0.5, py as f32 + 0.5) {
                    255
                } else {
                    0
                };

                if coverage > 0 {
                    self.blend(px, py, colour, coverage);
                }
            }
        }
    }

    /// Composite `colour` at a signed position with partial `coverage`.
    ///
    /// Out-of-bounds positions are ignored.
    pub fn blend_coverage(&mut self, x: i32, y: i32, colour: Colour, coverage: u8) {
        let edge = self.edge_length() as i32;
        if coverage == 0 || x < 0 || y < 0 || x >= edge || y >= edge {
            return;
        }
        self.blend(x as u32, y as u32, colour, coverage);
    }

    /// Read a pixel.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        Colour::new(r, g, b, a)
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.image.pixels().map(|p| {
            let [r, g, b, a] = p.0;
            Colour::new(r, g, b, a)
        })
    }

    /// Borrow the underlying image buffer.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the underlying image buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Source-over blend at an in-bounds position.
    fn blend(&mut self, x: u32, y: u32, colour: Colour, coverage: u8) {
        let alpha = (u32::from(colour.a) * u32::from(coverage) + 127) / 255;
        let pixel = self.image.get_pixel_mut(x, y);

        match alpha {
            0 => {}
            255 => *pixel = Rgba::from(colour),
            _ if pixel.0[3] == 0 => *pixel = Rgba([colour.r, colour.g, colour.b, alpha as u8]),
            _ => pixel.blend(&Rgba([colour.r, colour.g, colour.b, alpha as u8])),
        }
    }

    /// Intersect a rectangle with the canvas, returning `(x0, y0, x1, y1)`.
    fn clip(&self, x: i32, y: i32, width: i32, height: i32) -> Option<(u32, u32, u32, u32)> {
        if width <= 0 || height <= 0 {
            return None;
        }

        let edge = i64::from(self.edge_length());
        let x0 = i64::from(x).clamp(0, edge);
        let y0 = i64::from(y).clamp(0, edge);
        let x1 = (i64::from(x) + i64::from(width)).clamp(0, edge);
        let y1 = (i64::from(y) + i64::from(height)).clamp(0, edge);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}
