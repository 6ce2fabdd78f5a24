pub mod braille;
pub mod frame;

pub use braille::{BandColumn, BandPlot, rasterize_band};
pub use frame::Renderer;
