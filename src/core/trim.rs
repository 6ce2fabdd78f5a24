//! Cutting a cached segment partition down to the part left of a cutoff.
//!
//! Trimming runs on every probe, so it never rebuilds the partition: segments
//! wholly before the cutoff are borrowed as-is and only the one segment the
//! cutoff lands in gets a new, shorter point list.

use std::{borrow::Cow, fmt};

use crate::core::{
    constants::SPAN_EPSILON,
    segment::{Segment, SegmentPoint},
};

/// A finite x position up to which the band is shown.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Cutoff(f64);

impl Cutoff {
    /// Rejects NaN and infinities up front so they never reach the math.
    pub fn new(x: f64) -> Result<Self, CutoffError> {
        if x.is_finite() {
            Ok(Self(x))
        } else {
            Err(CutoffError::NonFinite(x))
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<i64> for Cutoff {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from(x: i64) -> Self {
        Self(x as f64)
    }
}

impl TryFrom<f64> for Cutoff {
    type Error = CutoffError;

    #[inline]
    fn try_from(x: f64) -> Result<Self, Self::Error> {
        Self::new(x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutoffError {
    NonFinite(f64),
}

impl fmt::Display for CutoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutoffError::NonFinite(x) => write!(f, "cutoff must be a finite number, got {x}"),
        }
    }
}
impl std::error::Error for CutoffError {}

/// A [`Segment`] as visible under a cutoff.
///
/// `index` is the originating segment's index. `points` borrows the source
/// when nothing was cut away.
#[derive(Clone, Debug, PartialEq)]
pub struct TrimmedSegment<'a> {
    pub index: usize,
    pub points: Cow<'a, [SegmentPoint]>,
    pub is_first_above: bool,
}

impl<'a> TrimmedSegment<'a> {
    #[inline]
    fn whole(seg: &'a Segment) -> Self {
        Self {
            index: seg.index,
            points: Cow::Borrowed(seg.points()),
            is_first_above: seg.is_first_above,
        }
    }

    #[inline]
    fn cut(seg: &Segment, points: Vec<SegmentPoint>) -> Self {
        Self {
            index: seg.index,
            points: Cow::Owned(points),
            is_first_above: seg.is_first_above,
        }
    }

    /// True when this is the source segment unchanged.
    #[inline]
    #[must_use]
    pub fn is_whole(&self) -> bool {
        matches!(self.points, Cow::Borrowed(_))
    }
}

/// The prefix of `seg` left of `cutoff`, or `None` if nothing drawable
/// remains. Expects `first.x < cutoff < last.x`.
#[allow(clippy::float_cmp)]
fn cut_inside(seg: &Segment, cutoff: f64) -> Option<Vec<SegmentPoint>> {
    let pts = seg.points();

    if let Some(hit) = pts.iter().position(|p| p.x == cutoff) {
        let prefix = &pts[..=hit];
        return (prefix.len() >= 2).then(|| prefix.to_vec());
    }

    let upper = pts.iter().position(|p| p.x > cutoff)?;
    if upper == 0 {
        return None;
    }

    let (a, b) = (&pts[upper - 1], &pts[upper]);
    let t = (cutoff - a.x) / (b.x - a.x).max(SPAN_EPSILON);
    let mut edge = a.lerp(b, t);
    edge.x = cutoff;

    let mut out = Vec::with_capacity(upper + 1);
    out.extend_from_slice(&pts[..upper]);
    out.push(edge);
    (out.len() >= 2).then_some(out)
}

/// Trim `segments` to the part strictly left of `cutoff`.
///
/// * no cutoff → every segment, unchanged and in order
/// * `cutoff <= first.x` → segment dropped
/// * `cutoff >= last.x` → segment kept whole
/// * otherwise → prefix ending at `cutoff`, interpolated if no point sits
///   there; dropped if that leaves fewer than two points
#[must_use]
pub fn trim_segments(segments: &[Segment], cutoff: Option<Cutoff>) -> Vec<TrimmedSegment<'_>> {
    let Some(cutoff) = cutoff.map(Cutoff::get) else {
        return segments.iter().map(TrimmedSegment::whole).collect();
    };

    let mut out = Vec::with_capacity(segments.len());
    for seg in segments {
        let (first_x, last_x) = seg.x_range();
        if cutoff <= first_x {
            continue;
        }
        if cutoff >= last_x {
            out.push(TrimmedSegment::whole(seg));
            continue;
        }
        if let Some(points) = cut_inside(seg, cutoff) {
            out.push(TrimmedSegment::cut(seg, points));
        }
    }

    log::trace!(
        "trimmed {} segment(s) at x = {cutoff} → {} visible",
        segments.len(),
        out.len()
    );
    out
}
