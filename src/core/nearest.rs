//! Snapping a data-space query position to the closest sample.

use crate::core::series::{PointSeries, Sample};

/// The sample whose x is closest to `query_x`, `None` for an empty series
/// or a non-finite query.
///
/// Binary search over the sorted series, then the two neighbours of the
/// insertion point are compared. Equidistant candidates resolve to the
/// smaller x; among duplicate x values the first in series order wins.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn locate_nearest(series: &PointSeries, query_x: f64) -> Option<&Sample> {
    if !query_x.is_finite() {
        return None;
    }
    let samples = series.as_slice();
    let i = samples.partition_point(|s| (s.x as f64) < query_x);

    let above = samples.get(i);
    let below = i.checked_sub(1).map(|j| {
        // first of a run of equal x
        let x = samples[j].x;
        &samples[samples[..j].partition_point(|s| s.x < x)]
    });

    match (below, above) {
        (Some(b), Some(a)) if distance(a, query_x) < distance(b, query_x) => Some(a),
        (Some(b), _) => Some(b),
        (None, a) => a,
    }
}

#[inline]
#[allow(clippy::cast_precision_loss)]
fn distance(s: &Sample, query_x: f64) -> f64 {
    (s.x as f64 - query_x).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(xs: &[i64]) -> PointSeries {
        xs.iter().map(|&x| Sample::new(x, 0.0, 0.0)).collect()
    }

    #[test]
    fn empty_series_has_no_nearest() {
        assert!(locate_nearest(&PointSeries::default(), 3.0).is_none());
    }

    #[test]
    fn exact_hit_returns_that_sample() {
        let s: PointSeries = vec![Sample::new(1, 4.0, 2.0), Sample::new(5, 9.0, 1.0)].into();
        assert_eq!(locate_nearest(&s, 5.0), Some(&Sample::new(5, 9.0, 1.0)));
        assert_eq!(locate_nearest(&s, 1.0), Some(&Sample::new(1, 4.0, 2.0)));
    }

    #[test]
    fn snaps_to_closest() {
        let s = series(&[0, 10, 20, 30]);
        assert_eq!(locate_nearest(&s, 13.9).map(|p| p.x), Some(10));
        assert_eq!(locate_nearest(&s, 26.0).map(|p| p.x), Some(30));
        assert_eq!(locate_nearest(&s, -100.0).map(|p| p.x), Some(0));
        assert_eq!(locate_nearest(&s, 1e9).map(|p| p.x), Some(30));
    }

    #[test]
    fn ties_go_to_smaller_x() {
        let s = series(&[2, 4, 6]);
        assert_eq!(locate_nearest(&s, 3.0).map(|p| p.x), Some(2));
        assert_eq!(locate_nearest(&s, 5.0).map(|p| p.x), Some(4));
    }

    #[test]
    fn non_finite_query_selects_nothing() {
        let s = series(&[7, 8]);
        assert!(locate_nearest(&s, f64::NAN).is_none());
        assert!(locate_nearest(&s, f64::INFINITY).is_none());
        assert!(locate_nearest(&s, f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn duplicates_resolve_to_first_in_order() {
        let s: PointSeries = vec![
            Sample::new(1, 0.0, 0.0),
            Sample::new(3, 1.0, 0.0),
            Sample::new(3, 2.0, 0.0),
        ]
        .into();
        assert_eq!(locate_nearest(&s, 9.0).map(|p| p.y1), Some(1.0));
        assert_eq!(locate_nearest(&s, 3.0).map(|p| p.y1), Some(1.0));
    }

    #[test]
    fn matches_a_full_scan() {
        let s = series(&[-9, -4, 0, 1, 2, 7, 15, 16, 40]);
        let mut q = -12.0;
        while q < 45.0 {
            let scan = s
                .iter()
                .min_by(|a, b| distance(a, q).total_cmp(&distance(b, q)))
                .map(|p| p.x);
            assert_eq!(locate_nearest(&s, q).map(|p| p.x), scan, "query {q}");
            q += 0.25;
        }
    }
}
