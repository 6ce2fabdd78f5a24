//! Cached band state: one full partition per data set, cheap probes on top.
//!
//! Data changes go through [`BandModel::replace_data`], which rebuilds the
//! series and its partition before swapping both in. Probing never touches
//! the partition; it only snaps the query and trims.

use std::fmt;

use crate::core::{
    nearest::locate_nearest,
    segment::{Segment, build_segments},
    series::{PointSeries, Sample},
    trim::{Cutoff, CutoffError, TrimmedSegment, trim_segments},
};

/// The currently probed sample x, owned by whoever drives interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    pub x: i64,
}

impl Selection {
    #[inline]
    #[must_use]
    pub fn cutoff(self) -> Cutoff {
        Cutoff::from(self.x)
    }
}

#[derive(Clone, Debug, Default)]
pub struct BandModel {
    series: PointSeries,
    segments: Vec<Segment>,
}

impl BandModel {
    #[must_use]
    pub fn new(samples: Vec<Sample>) -> Self {
        let series = PointSeries::new(samples);
        let segments = build_segments(&series);
        log::debug!(
            "built partition: {} sample(s) → {} segment(s)",
            series.len(),
            segments.len()
        );
        Self { series, segments }
    }

    /// Rebuild from new data. The old partition stays in place until the new
    /// one is complete.
    pub fn replace_data(&mut self, samples: Vec<Sample>) {
        *self = Self::new(samples);
    }

    #[inline]
    #[must_use]
    pub fn series(&self) -> &PointSeries {
        &self.series
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Snap a data-space x to the nearest sample; `None` when empty or for
    /// a non-finite `query_x`.
    #[must_use]
    pub fn select(&self, query_x: f64) -> Option<Selection> {
        locate_nearest(&self.series, query_x).map(|s| Selection { x: s.x })
    }

    /// Partition as visible under `selection`; everything when `None`.
    #[must_use]
    pub fn trimmed(&self, selection: Option<Selection>) -> Vec<TrimmedSegment<'_>> {
        trim_segments(&self.segments, selection.map(Selection::cutoff))
    }

    /// Resolve a pointer position (already in data units) into a selection
    /// and the matching visible partition.
    ///
    /// # Errors
    /// [`CutoffError::NonFinite`] if `query_x` is NaN or infinite.
    pub fn probe(&self, query_x: Option<f64>) -> Result<Probe<'_>, CutoffError> {
        let query = query_x.map(Cutoff::new).transpose()?;
        let sample = query.and_then(|q| locate_nearest(&self.series, q.get())).copied();
        let selection = sample.map(|s| Selection { x: s.x });
        Ok(Probe {
            selection,
            sample,
            trimmed: self.trimmed(selection),
        })
    }
}

/// Result of one interaction step.
#[derive(Clone, Debug, PartialEq)]
pub struct Probe<'a> {
    pub selection: Option<Selection>,
    pub sample: Option<Sample>,
    pub trimmed: Vec<TrimmedSegment<'a>>,
}

impl Probe<'_> {
    #[must_use]
    pub fn readout(&self, decimals: usize) -> Option<Readout> {
        self.sample.map(|sample| Readout { sample, decimals })
    }
}

/// Human-readable numbers for a probed sample.
///
/// `x = 6   y1 = 65.0   y2 = 60.0   Δ = +5.0`
#[derive(Clone, Copy, Debug)]
pub struct Readout {
    pub sample: Sample,
    pub decimals: usize,
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Sample { x, y1, y2 } = self.sample;
        let d = self.decimals;
        write!(
            f,
            "x = {x}   y1 = {y1:.d$}   y2 = {y2:.d$}   Δ = {:+.d$}",
            self.sample.diff()
        )
    }
}
