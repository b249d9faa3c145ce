/// One fully computed grid of pixel colors.
///
/// Row-major, one packed `0x00RRGGBB` entry per pixel, produced fresh on
/// every render call. Immutable once produced; the presentation layer either
/// reads pixels directly or blits `to_rgba_bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Frame {
    /// Wrap a row-major pixel buffer.
    ///
    /// Panics if the buffer length does not match `width * height`; the
    /// renderer is the only producer, so a mismatch is a programming error.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer does not match {width}x{height}"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed color at (x, y). Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Row-major packed pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// RGBA8 bytes (alpha 255) in row-major order, the layout canvas and
    /// texture APIs blit directly.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &color in &self.pixels {
            bytes.push((color >> 16) as u8);
            bytes.push((color >> 8) as u8);
            bytes.push(color as u8);
            bytes.push(255);
        }
        bytes
    }
}
