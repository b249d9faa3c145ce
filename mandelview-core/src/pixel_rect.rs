use serde::{Deserialize, Serialize};

/// Rectangle in pixel space (always u32 coordinates)
///
/// The renderer describes its work in these: a full frame is the rect at
/// (0, 0), and the parallel render splits it into full-width row bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area in pixels.
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Check if a pixel lies inside the rectangle.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Split into full-width horizontal bands of at most `band_height` rows.
    ///
    /// Bands cover the rectangle exactly, in top-to-bottom order; the last
    /// band may be shorter. Used to hand independent row ranges to parallel
    /// workers.
    pub fn row_bands(&self, band_height: u32) -> Vec<PixelRect> {
        assert!(band_height >= 1, "band_height must be >= 1");
        (0..self.height)
            .step_by(band_height as usize)
            .map(|dy| {
                PixelRect::new(
                    self.x,
                    self.y + dy,
                    self.width,
                    band_height.min(self.height - dy),
                )
            })
            .collect()
    }
}
