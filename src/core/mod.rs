//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod model;
pub mod nearest;
pub mod rng;
pub mod segment;
pub mod series;
pub mod trim;

// re-export frequently-used items for convenience
pub use bounds::Axis;
pub use color::{AnsiCode, ColorError, Palette, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{
    BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_VERTICAL_RESOLUTION, CROSSING_TOLERANCE,
    DECIMAL_PRECISION, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
};
pub use error::{ConfigError, GraphError};
pub use model::{BandModel, Probe, Readout, Selection};
pub use nearest::locate_nearest;
pub use segment::{Segment, SegmentPoint, build_segments};
pub use series::{PointSeries, Sample};
pub use trim::{Cutoff, CutoffError, TrimmedSegment, trim_segments};
