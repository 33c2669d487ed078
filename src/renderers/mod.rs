pub mod colormap;
pub mod map_renderer;

pub use colormap::{normalize, ColorScheme};
pub use map_renderer::MapRenderer;
