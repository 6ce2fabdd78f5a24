//! Public-facing crate root – re-exports + one-shot helper.
//!
//! The core turns paired `(x, y1, y2)` samples into a partition of segments
//! that switch side exactly where the two lines cross
//! ([`build_segments`]), cuts that partition at an interactive cutoff
//! ([`trim_segments`]) and snaps a pointer x to the closest sample
//! ([`locate_nearest`]). [`BandModel`] caches the partition so that probing
//! only ever re-trims. The `render` and `cli` layers draw all of this as a
//! coloured braille band in the terminal.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, Palette, colorize},
    config::{Config, ConfigBuilder},
    constants::DECIMAL_PRECISION,
    error::{ConfigError, GraphError},
    model::{BandModel, Probe, Readout, Selection},
    nearest::locate_nearest,
    segment::{Segment, SegmentPoint, build_segments},
    series::{PointSeries, Sample},
    trim::{Cutoff, CutoffError, TrimmedSegment, trim_segments},
};

pub use render::{BandPlot, Renderer, rasterize_band};

/// Convenience function: plot a **static** in-memory data set with automatic
/// axis scaling, optionally probed at `probe_x`.
pub fn plot_band(samples: Vec<Sample>, title: &str, probe_x: Option<f64>) -> Result<(), GraphError> {
    use crate::core::bounds::{Axis, graph_dims, terminal_geometry, y_label_width};

    if samples.is_empty() {
        return Err(GraphError::EmptyData);
    }
    let model = BandModel::new(samples);
    let (y_min, y_max) = Axis::Y.bounds(model.series());
    let (x_min, x_max) = Axis::X.bounds(model.series());

    let label_width = y_label_width((y_min, y_max), DECIMAL_PRECISION);
    let (x_chars, y_chars) = graph_dims(terminal_geometry(), label_width);

    let cfg = Config::builder(x_chars, y_chars)
        .title(title)
        .y_range(y_min..=y_max)
        .x_range(x_min, x_max)
        .build()?;

    let probe = model.probe(probe_x)?;
    let plot = rasterize_band(&probe.trimmed, probe.selection, &cfg);
    let readout = probe.readout(DECIMAL_PRECISION).map(|r| r.to_string());
    Renderer::full().render(&cfg, &plot, readout.as_deref())
}
