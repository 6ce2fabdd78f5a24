//! Geometry helpers: axis ranges + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{BORDER_WIDTH, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH},
    series::PointSeries,
};

/// Which axis we’re measuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Inclusive bounds over the series, both lines included for `Y`.
    ///
    /// * An empty series falls back to `(0.0, 1.0)`.
    /// * A flat range is widened by ±0.5 so the plot keeps a non-zero extent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bounds(self, series: &PointSeries) -> (f64, f64) {
        let range = match self {
            Self::X => series.x_domain().map(|(lo, hi)| (lo as f64, hi as f64)),
            Self::Y => series.y_bounds(),
        };
        let Some((low, high)) = range else {
            return (0.0, 1.0);
        };

        if (high - low).abs() < f64::EPSILON {
            return (low - 0.5, high + 0.5);
        }
        (low, high)
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Character grid left for the band once borders, labels and the two chrome
/// rows above and below are taken out.
#[inline]
#[must_use]
pub fn graph_dims((w, h): (Width, Height), label_width: usize) -> (usize, usize) {
    let x_chars = usize::from(w.0)
        .saturating_sub(BORDER_WIDTH + LABEL_GUTTER + label_width + 1)
        .max(MIN_GRAPH_WIDTH);
    let y_chars = usize::from(h.0).saturating_sub(5).max(MIN_GRAPH_HEIGHT);
    (x_chars, y_chars)
}

/// How wide will the y-axis labels be for the given range?
#[inline]
#[must_use]
pub fn y_label_width((low, high): (f64, f64), decimals: usize) -> usize {
    let lo = format!("{low:.decimals$}").len();
    let hi = format!("{high:.decimals$}").len();
    lo.max(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::Sample;

    #[test]
    fn y_bounds_cover_both_lines() {
        let s: PointSeries = vec![Sample::new(0, 1.0, -3.0), Sample::new(4, 9.0, 2.0)].into();
        assert_eq!(Axis::Y.bounds(&s), (-3.0, 9.0));
        assert_eq!(Axis::X.bounds(&s), (0.0, 4.0));
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        let s: PointSeries = vec![Sample::new(2, 1.0, 1.0)].into();
        assert_eq!(Axis::X.bounds(&s), (1.5, 2.5));
        assert_eq!(Axis::Y.bounds(&s), (0.5, 1.5));
        assert_eq!(Axis::Y.bounds(&PointSeries::default()), (0.0, 1.0));
    }

    #[test]
    fn dims_respect_minimums() {
        assert_eq!(graph_dims((Width(10), Height(3)), 4), (MIN_GRAPH_WIDTH, MIN_GRAPH_HEIGHT));
        assert_eq!(graph_dims((Width(80), Height(30)), 5), (71, 25));
    }

    #[test]
    fn label_width() {
        assert_eq!(y_label_width((-12.34, 5.0), 1), 5);
    }
}
