pub mod colorizer;
pub mod escape_time;
pub mod frame;
pub mod renderer;

pub use colorizer::escape_color;
pub use escape_time::{escape_time, EscapeData};
pub use frame::Frame;
pub use renderer::{render_region, FractalRenderer};

// Re-export core types for convenience
pub use mandelview_core::*;
