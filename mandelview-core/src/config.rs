//! Explorer configuration.
//!
//! Canonical source of the reference view parameters shared by the
//! presentation layer and the compute crate.

use crate::Viewport;

/// Fixed parameters of the explorer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplorerConfig {
    /// Canvas dimensions in pixels
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Plane coordinates anchored to pixel (0, 0) at startup
    pub default_top_left: (f64, f64),
    /// Pixels per plane unit at startup
    pub default_scale: f64,
    /// Escape-time cap at startup
    pub default_max_iterations: u32,
    /// Scale multiplier for a zoom-in gesture
    pub zoom_in_factor: f64,
    /// Scale multiplier for a zoom-out gesture
    pub zoom_out_factor: f64,
}

impl ExplorerConfig {
    /// Create the startup viewport for this configuration.
    pub fn default_viewport(&self) -> Viewport {
        Viewport::new(
            self.default_top_left.0,
            self.default_top_left.1,
            self.default_scale,
            self.default_max_iterations,
        )
    }
}

/// Default explorer parameters: 600x600 canvas showing roughly
/// [-3, 3] x [-3, 3] of the plane at startup.
pub static EXPLORER_CONFIG: ExplorerConfig = ExplorerConfig {
    canvas_width: 600,
    canvas_height: 600,
    default_top_left: (-3.0, 3.0),
    default_scale: 100.0,
    default_max_iterations: 300,
    zoom_in_factor: 2.0,
    zoom_out_factor: 0.5,
};
