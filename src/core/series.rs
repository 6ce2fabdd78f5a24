//! Paired samples and the x-ordered series built from them.

use std::ops::Deref;

/// One x position with the two values being compared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: i64,
    pub y1: f64,
    pub y2: f64,
}

impl Sample {
    #[inline]
    #[must_use]
    pub const fn new(x: i64, y1: f64, y2: f64) -> Self {
        Self { x, y1, y2 }
    }

    /// Signed distance of the first series over the second.
    #[inline]
    #[must_use]
    pub fn diff(&self) -> f64 {
        self.y1 - self.y2
    }

    /// Ties count as "first above".
    #[inline]
    #[must_use]
    pub fn is_first_above(&self) -> bool {
        self.y1 >= self.y2
    }
}

/// Immutable, ascending-by-x collection of [`Sample`]s.
///
/// Callers are expected to hand in unique x values. Duplicates are not
/// removed; a stable sort keeps them in input order and a warning is logged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSeries {
    samples: Vec<Sample>,
}

impl PointSeries {
    #[must_use]
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.x);

        let dupes = samples.windows(2).filter(|w| w[0].x == w[1].x).count();
        if dupes > 0 {
            log::warn!("point series has {dupes} duplicate x value(s); order among them is input order");
        }

        Self { samples }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Inclusive `(first.x, last.x)`, `None` when empty.
    #[must_use]
    pub fn x_domain(&self) -> Option<(i64, i64)> {
        Some((self.samples.first()?.x, self.samples.last()?.x))
    }

    /// Smallest and largest value over both series, `None` when empty.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        if self.samples.is_empty() {
            return None;
        }
        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
        for s in &self.samples {
            low = low.min(s.y1.min(s.y2));
            high = high.max(s.y1.max(s.y2));
        }
        Some((low, high))
    }

    /// Exact lookup by x.
    #[must_use]
    pub fn get(&self, x: i64) -> Option<&Sample> {
        self.samples
            .binary_search_by_key(&x, |s| s.x)
            .ok()
            .map(|i| &self.samples[i])
    }
}

impl Deref for PointSeries {
    type Target = [Sample];

    #[inline]
    fn deref(&self) -> &[Sample] {
        &self.samples
    }
}

impl From<Vec<Sample>> for PointSeries {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<Sample> for PointSeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_x() {
        let series = PointSeries::new(vec![
            Sample::new(3, 1.0, 2.0),
            Sample::new(1, 5.0, 0.0),
            Sample::new(2, 4.0, 4.0),
        ]);
        let xs: Vec<i64> = series.iter().map(|s| s.x).collect();
        assert_eq!(xs, [1, 2, 3]);
        assert_eq!(series.x_domain(), Some((1, 3)));
    }

    #[test]
    fn empty_and_single() {
        let empty = PointSeries::new(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.x_domain(), None);
        assert_eq!(empty.y_bounds(), None);

        let one: PointSeries = std::iter::once(Sample::new(9, 1.0, 3.0)).collect();
        assert_eq!(one.len(), 1);
        assert_eq!(one.x_domain(), Some((9, 9)));
    }

    #[test]
    fn ties_are_first_above() {
        assert!(Sample::new(0, 2.0, 2.0).is_first_above());
        assert!(!Sample::new(0, 1.0, 2.0).is_first_above());
        assert!((Sample::new(0, 1.0, 2.5).diff() + 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn duplicates_are_kept_in_input_order() {
        let series = PointSeries::new(vec![
            Sample::new(2, 1.0, 0.0),
            Sample::new(1, 0.0, 0.0),
            Sample::new(2, 7.0, 0.0),
        ]);
        assert_eq!(series.len(), 3);
        assert!((series[1].y1 - 1.0).abs() < f64::EPSILON);
        assert!((series[2].y1 - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lookup_and_bounds() {
        let series = PointSeries::new(vec![
            Sample::new(10, -2.0, 4.0),
            Sample::new(20, 8.0, 1.0),
        ]);
        assert_eq!(series.get(20), Some(&Sample::new(20, 8.0, 1.0)));
        assert_eq!(series.get(15), None);
        assert_eq!(series.y_bounds(), Some((-2.0, 8.0)));
    }
}
