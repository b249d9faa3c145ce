pub mod config;
pub mod pixel_rect;
pub mod viewport;

pub use config::{ExplorerConfig, EXPLORER_CONFIG};
pub use pixel_rect::PixelRect;
pub use viewport::{PanDirection, Viewport};
