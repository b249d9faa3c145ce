use serde::{Deserialize, Serialize};

/// One pan step moves the view by 1/8 of the visible extent along that axis.
const PAN_STEP_DIVISOR: f64 = 8.0;

/// Direction of a single pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Viewport mapping pixel space to the complex plane
///
/// Holds the affine mapping applied to every pixel before iteration:
/// - `top_left_re`, `top_left_im`: plane coordinates anchored to pixel (0, 0)
/// - `scale`: pixels per unit of plane distance, always > 0
/// - `max_iterations`: escape-time cap, always >= 1
///
/// The mapping is `re = px/scale + top_left_re`, `im = py/scale - top_left_im`.
/// Note the imaginary anchor enters with a negative sign; `pan` and
/// `zoom_at_point` are written against that convention.
///
/// Pan and zoom are plain arithmetic on this state vector; there is no
/// reachable invalid state from valid transitions, and no bound on how far
/// out the view can be panned or how deep it can be zoomed (f64 underflow at
/// extreme zoom is a known, accepted limit).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub top_left_re: f64,
    pub top_left_im: f64,
    pub scale: f64,
    pub max_iterations: u32,
}

impl Viewport {
    /// Create a viewport.
    ///
    /// Panics if `scale` is not strictly positive or `max_iterations` is 0.
    /// Both values are program-controlled, never user input, so a violation
    /// is a programming error rather than a recoverable condition.
    pub fn new(top_left_re: f64, top_left_im: f64, scale: f64, max_iterations: u32) -> Self {
        assert!(scale > 0.0, "viewport scale must be > 0, got {scale}");
        assert!(max_iterations >= 1, "max_iterations must be >= 1");
        Self {
            top_left_re,
            top_left_im,
            scale,
            max_iterations,
        }
    }

    /// Map a pixel coordinate to its complex-plane point.
    ///
    /// Coordinates need not be integral or in-bounds: pixels outside the
    /// canvas extrapolate to plane points outside the rendered window, which
    /// is valid and used by gesture handling.
    pub fn pixel_to_complex(&self, px: f64, py: f64) -> (f64, f64) {
        let re = px / self.scale + self.top_left_re;
        let im = py / self.scale - self.top_left_im;
        (re, im)
    }

    /// Map a complex-plane point back to pixel coordinates.
    ///
    /// Exact inverse of `pixel_to_complex` up to f64 rounding.
    pub fn complex_to_pixel(&self, re: f64, im: f64) -> (f64, f64) {
        let px = (re - self.top_left_re) * self.scale;
        let py = (im + self.top_left_im) * self.scale;
        (px, py)
    }

    /// Shift the view one step in the given direction.
    ///
    /// The step is 1/8 of the visible extent along that axis at the current
    /// scale, so pan speed stays proportional to zoom depth. Opposite
    /// directions are exact arithmetic inverses.
    pub fn pan(&mut self, direction: PanDirection, canvas_width: u32, canvas_height: u32) {
        let visible_width = canvas_width as f64 / self.scale;
        let visible_height = canvas_height as f64 / self.scale;

        match direction {
            PanDirection::Up => self.top_left_im += visible_height / PAN_STEP_DIVISOR,
            PanDirection::Down => self.top_left_im -= visible_height / PAN_STEP_DIVISOR,
            PanDirection::Left => self.top_left_re -= visible_width / PAN_STEP_DIVISOR,
            PanDirection::Right => self.top_left_re += visible_width / PAN_STEP_DIVISOR,
        }
    }

    /// Change scale while keeping the plane point under pixel `(px, py)`
    /// visually fixed, then re-center the canvas on that point.
    ///
    /// Panics if `new_scale` is not strictly positive. No minimum or maximum
    /// scale is enforced; gestures typically pass `scale * 2.0` to zoom in
    /// and `scale * 0.5` to zoom out.
    pub fn zoom_at_point(
        &mut self,
        px: f64,
        py: f64,
        new_scale: f64,
        canvas_width: u32,
        canvas_height: u32,
    ) {
        assert!(new_scale > 0.0, "zoom scale must be > 0, got {new_scale}");

        // Move the clicked point to the mapping origin at the old scale.
        self.top_left_re += px / self.scale;
        self.top_left_im -= py / self.scale;

        self.scale = new_scale;

        // Re-center the canvas around that point at the new scale.
        self.top_left_re -= (canvas_width as f64 / 2.0) / new_scale;
        self.top_left_im += (canvas_height as f64 / 2.0) / new_scale;
    }
}
