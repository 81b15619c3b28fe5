//! Background painters for each avatar style.
//!
//! Geometry uses truncating integer division on the edge length. Sampled
//! ranges are half-open; a range whose upper bound does not exceed its lower
//! bound yields the lower bound.

use rand::Rng;

use crate::types::Colour;

use super::Canvas;

/// Number of ellipses in the pattern style.
pub const PATTERN_ELLIPSES: usize = 50;

/// Channel variation range for pattern ellipses, `-70..70`.
pub const PATTERN_VARIATION: i32 = 70;

/// Alpha of each pattern ellipse.
pub const PATTERN_ALPHA: u8 = 40;

/// Tiles per side in the mosaic style.
pub const MOSAIC_TILES: i32 = 10;

/// Channel variation range for mosaic tiles, `-25..25`.
pub const MOSAIC_VARIATION: i32 = 25;

/// Channel variation range for bars, `-70..70`.
pub const BAR_VARIATION: i32 = 70;

/// Alpha of each bar.
pub const BAR_ALPHA: u8 = 60;

/// Uniform sample from `low..high`, or `low` if the range is empty.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high <= low {
        low
    } else {
        rng.gen_range(low..high)
    }
}

/// Solid background.
pub fn paint_flat(canvas: &mut Canvas, background: Colour) {
    canvas.fill(background);
}

/// Bounding box and colour of one pattern ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternEllipse {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub colour: Colour,
}

/// The 50 ellipses of the pattern style, in paint order.
///
/// Each one draws a size in `edge/10..edge/4`, a centre anywhere on the
/// canvas and a channel shift, in that order.
pub fn pattern_ellipses<R: Rng + ?Sized>(
    edge: i32,
    background: Colour,
    rng: &mut R,
) -> Vec<PatternEllipse> {
    (0..PATTERN_ELLIPSES)
        .map(|_| {
            let radius = sample(rng, edge / 10, edge / 4);
            let x = sample(rng, 0, edge);
            let y = sample(rng, 0, edge);
            let delta = sample(rng, -PATTERN_VARIATION, PATTERN_VARIATION);

            // The box is `radius` across, so `radius` acts as a diameter here.
            PatternEllipse {
                x: x - radius / 2,
                y: y - radius / 2,
                width: radius,
                height: radius,
                colour: background.shifted(delta, PATTERN_ALPHA),
            }
        })
        .collect()
}

/// Background plus 50 soft translucent ellipses.
pub fn paint_pattern<R: Rng + ?Sized>(canvas: &mut Canvas, background: Colour, rng: &mut R) {
    canvas.fill(background);

    let edge = canvas.edge_length() as i32;
    for e in pattern_ellipses(edge, background, rng) {
        canvas.fill_ellipse(e.x, e.y, e.width, e.height, e.colour);
    }
}

/// Opaque tiles of `edge/10` pixels, each a small variation of the background.
///
/// Tiles cover the whole canvas; when the edge is not a multiple of ten the
/// last row and column are clipped. Canvases under ten pixels use one-pixel
/// tiles.
pub fn paint_mosaic<R: Rng + ?Sized>(canvas: &mut Canvas, background: Colour, rng: &mut R) {
    canvas.fill(background);

    let edge = canvas.edge_length() as i32;
    let tile = (edge / MOSAIC_TILES).max(1);

    for y in (0..edge).step_by(tile as usize) {
        for x in (0..edge).step_by(tile as usize) {
            let delta = sample(rng, -MOSAIC_VARIATION, MOSAIC_VARIATION);
            canvas.fill_rect(x, y, tile, tile, background.shifted(delta, 255));
        }
    }
}

/// Translucent vertical bars of random height anchored to the bottom edge.
pub fn paint_bars<R: Rng + ?Sized>(canvas: &mut Canvas, background: Colour, rng: &mut R) {
    canvas.fill(background);

    let edge = canvas.edge_length() as i32;
    let bar_width = edge / 25;
    let spacing = (edge / 20).max(1);

    for x in (0..edge).step_by(spacing as usize) {
        let height = sample(rng, edge / 4, edge);
        let delta = sample(rng, -BAR_VARIATION, BAR_VARIATION);
        canvas.fill_rect(
            x,
            edge - height,
            bar_width,
            height,
            background.shifted(delta, BAR_ALPHA),
        );
    }
}
