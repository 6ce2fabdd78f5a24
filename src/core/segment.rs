//! Partition of a [`PointSeries`] into same-sign runs joined at exact
//! crossing points.
//!
//! Every segment holds a polyline of [`SegmentPoint`]s and the side the
//! first series is on over that run. Adjacent segments share their boundary
//! point, so a renderer can fill each segment on its own and switch colour at
//! the seam without gaps.
//!
//! ```text
//!  y1 ───╮         ╭───
//!        ╰──╮   ╭──╯
//!  ▓▓▓▓▓▓▓▓▓▓╳░░░░░░    ╳ = crossing, shared by both segments
//!  y2 ──────╯╰──────
//! ```

use crate::core::{
    constants::PARALLEL_EPSILON,
    series::{PointSeries, Sample},
};

/// A vertex on a segment's polyline. `x` is real because crossings rarely
/// land on a sample's x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentPoint {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

impl SegmentPoint {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y1: f64, y2: f64) -> Self {
        Self { x, y1, y2 }
    }

    /// Straight-line blend towards `other`; `t = 0` is `self`.
    #[inline]
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x: t.mul_add(other.x - self.x, self.x),
            y1: t.mul_add(other.y1 - self.y1, self.y1),
            y2: t.mul_add(other.y2 - self.y2, self.y2),
        }
    }
}

impl From<&Sample> for SegmentPoint {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from(s: &Sample) -> Self {
        Self::new(s.x as f64, s.y1, s.y2)
    }
}

/// Maximal run over which one series stays on the same side of the other.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Position in the partition, assigned at build time.
    pub index: usize,
    points: Vec<SegmentPoint>,
    pub is_first_above: bool,
}

impl Segment {
    /// `None` for an empty polyline; every segment holds at least one point.
    #[must_use]
    pub fn new(index: usize, points: Vec<SegmentPoint>, is_first_above: bool) -> Option<Self> {
        (!points.is_empty()).then_some(Self {
            index,
            points,
            is_first_above,
        })
    }

    #[inline]
    #[must_use]
    pub fn points(&self) -> &[SegmentPoint] {
        &self.points
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> &SegmentPoint {
        &self.points[0]
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> &SegmentPoint {
        &self.points[self.points.len() - 1]
    }

    /// Inclusive x extent.
    #[inline]
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        (self.first().x, self.last().x)
    }
}

/// Where the two lines meet between `a` and `b`.
///
/// Near-parallel pairs have no usable solution, so the midpoint stands in.
/// Otherwise the parameter is clamped to `[0, 1]` against overshoot.
#[must_use]
pub fn crossing(a: &Sample, b: &Sample) -> SegmentPoint {
    let dy1 = b.y1 - a.y1;
    let dy2 = b.y2 - a.y2;
    let denom = dy1 - dy2;

    let t = if denom.abs() < PARALLEL_EPSILON {
        0.5
    } else {
        ((a.y2 - a.y1) / denom).clamp(0.0, 1.0)
    };

    let (ax, bx) = (SegmentPoint::from(a).x, SegmentPoint::from(b).x);
    let y = t.mul_add(dy1, a.y1);
    SegmentPoint::new(t.mul_add(bx - ax, ax), y, y)
}

/// Build the full segment partition for `series`.
///
/// * empty series → no segments
/// * one sample → one single-point segment
/// * otherwise segments cover `[first.x, last.x]`, consecutive ones sharing
///   exactly one boundary point
#[must_use]
pub fn build_segments(series: &PointSeries) -> Vec<Segment> {
    let Some(head) = series.first() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut current = Segment {
        index: 0,
        points: vec![SegmentPoint::from(head)],
        is_first_above: head.is_first_above(),
    };

    for pair in series.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);

        if a.is_first_above() != b.is_first_above() {
            let seam = crossing(a, b);
            current.points.push(seam);

            let next = Segment {
                index: current.index + 1,
                points: vec![seam],
                is_first_above: b.is_first_above(),
            };
            out.push(std::mem::replace(&mut current, next));
        }
        current.points.push(SegmentPoint::from(b));
    }

    out.push(current);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::CROSSING_TOLERANCE;

    fn series(raw: &[(i64, f64, f64)]) -> PointSeries {
        raw.iter().map(|&(x, y1, y2)| Sample::new(x, y1, y2)).collect()
    }

    #[test]
    fn segment_needs_a_point() {
        assert!(Segment::new(0, Vec::new(), true).is_none());
        let seg = Segment::new(3, vec![SegmentPoint::new(1.0, 2.0, 0.0)], true).unwrap();
        assert_eq!(seg.x_range(), (1.0, 1.0));
        assert_eq!(seg.first(), seg.last());
    }

    #[test]
    fn empty_series_has_no_segments() {
        assert!(build_segments(&PointSeries::default()).is_empty());
    }

    #[test]
    fn single_sample_is_one_point_segment() {
        let segs = build_segments(&series(&[(4, 1.0, 3.0)]));
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].points(), [SegmentPoint::new(4.0, 1.0, 3.0)]);
        assert!(!segs[0].is_first_above);
        assert_eq!(segs[0].index, 0);
    }

    #[test]
    fn same_side_stays_one_segment() {
        let segs = build_segments(&series(&[(0, 5.0, 1.0), (1, 6.0, 2.0), (2, 3.0, 3.0)]));
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].points().len(), 3);
        assert!(segs[0].is_first_above);
    }

    #[test]
    fn known_crossing() {
        let segs = build_segments(&series(&[(6, 65.0, 60.0), (7, 60.0, 66.0)]));
        assert_eq!(segs.len(), 2);

        let seam = segs[0].last();
        assert!((seam.x - (6.0 + 5.0 / 11.0)).abs() < 1e-9);
        assert!((seam.y1 - 62.727_272_727_272_73).abs() < 1e-9);
        // y2-side interpolation must agree
        let t = 5.0 / 11.0;
        assert!((seam.y2 - (60.0 + t * 6.0)).abs() < 1e-9);

        assert!(segs[0].is_first_above);
        assert!(!segs[1].is_first_above);
        assert_eq!(segs[1].first(), seam);
        assert_eq!(segs[1].index, 1);
        assert_eq!(segs[1].last(), &SegmentPoint::new(7.0, 60.0, 66.0));
    }

    #[test]
    fn parallel_pair_splits_at_midpoint() {
        // both lines fall by the same amount, but a tie flips the side
        let a = Sample::new(0, 2.0, 2.0);
        let b = Sample::new(10, 1.0, 1.0 + 1e-15);
        assert_ne!(a.is_first_above(), b.is_first_above());
        let seam = crossing(&a, &b);
        assert!((seam.x - 5.0).abs() < 1e-12);
    }

    #[test]
    fn clamps_to_interval() {
        // a sits exactly on the crossing, so t resolves to 0
        let a = Sample::new(0, 3.0, 3.0);
        let b = Sample::new(2, 1.0, 5.0);
        let seam = crossing(&a, &b);
        assert!(seam.x.abs() < 1e-12);
        assert!((seam.y1 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn partition_invariants_hold_on_zigzag() {
        let raw: Vec<(i64, f64, f64)> = (0..40)
            .map(|i| {
                let f = f64::from(i);
                (i64::from(i), (f * 0.7).sin() * 10.0, (f * 0.3).cos() * 8.0)
            })
            .collect();
        let s = series(&raw);
        let segs = build_segments(&s);

        assert!((segs[0].first().x - 0.0).abs() < f64::EPSILON);
        assert!((segs[segs.len() - 1].last().x - 39.0).abs() < f64::EPSILON);

        for pair in segs.windows(2) {
            assert_eq!(pair[0].last(), pair[1].first());
            assert_ne!(pair[0].is_first_above, pair[1].is_first_above);
            let seam = pair[0].last();
            assert!((seam.y1 - seam.y2).abs() < CROSSING_TOLERANCE);
        }

        for seg in &segs {
            let n = seg.points().len();
            for p in &seg.points()[1..n.saturating_sub(1)] {
                assert_eq!(p.y1 >= p.y2, seg.is_first_above);
            }
        }

        for (i, seg) in segs.iter().enumerate() {
            assert_eq!(seg.index, i);
        }
    }
}
