use std::time::Instant;

use log::debug;
use rayon::prelude::*;

use mandelview_core::{PixelRect, Viewport};

use crate::colorizer::escape_color;
use crate::escape_time::escape_time;
use crate::frame::Frame;

/// Rows per parallel work unit. Full-width bands keep the output assembly a
/// plain concatenation while giving the scheduler enough pieces to balance
/// uneven per-row iteration cost near the set boundary.
const BAND_ROWS: u32 = 16;

/// Escape-time renderer producing one complete `Frame` per call.
///
/// Rendering is a pure function of `(viewport, width, height)`: identical
/// inputs yield bit-identical frames regardless of worker scheduling, since
/// every pixel is computed independently and assembled in row order. The
/// viewport is read-only for the duration of a render; gesture handling
/// mutates it only between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractalRenderer;

impl FractalRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full color grid for the viewport at the given canvas size.
    ///
    /// The per-pixel loop is parallelized over row bands; the join before
    /// `Frame` construction is the only ordering requirement. There is no
    /// failure path: every finite viewport produces a valid frame.
    pub fn render(&self, viewport: &Viewport, width: u32, height: u32) -> Frame {
        let started = Instant::now();

        let pixels: Vec<u32> = PixelRect::new(0, 0, width, height)
            .row_bands(BAND_ROWS)
            .par_iter()
            .flat_map_iter(|band| render_region(viewport, band))
            .collect();

        let frame = Frame::from_pixels(width, height, pixels);
        debug!(
            "rendered {}x{} at scale {:.3e} in {:?}",
            width,
            height,
            viewport.scale,
            started.elapsed()
        );
        frame
    }
}

/// Compute one pixel-space rectangle of the frame, row-major within the
/// region, in absolute pixel coordinates.
///
/// The full-frame render is defined as the concatenation of its row bands,
/// so a tiled or progressive presentation can schedule regions itself and
/// get pixels identical to a monolithic render.
pub fn render_region(viewport: &Viewport, region: &PixelRect) -> Vec<u32> {
    let mut pixels = Vec::with_capacity(region.area() as usize);

    for py in region.y..region.y + region.height {
        for px in region.x..region.x + region.width {
            let (c_re, c_im) = viewport.pixel_to_complex(px as f64, py as f64);
            let data = escape_time(c_re, c_im, viewport.max_iterations);
            pixels.push(escape_color(&data));
        }
    }

    pixels
}
