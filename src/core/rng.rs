//! Tiny LCG + Box-Muller, and the paired random walk the demo plots.

use crate::core::series::Sample;

#[derive(Clone, Debug)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        Self(nanos)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.0 >> 32) as u32
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Standard normal 𝒩(0, 1) sample.
    #[inline]
    pub fn randn(&mut self) -> f64 {
        let u1 = self.next_f64().max(f64::MIN_POSITIVE);
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

/// Two independent Itô walks on integer x, endless.
///
/// Each step adds `mu + sigma * N(0, 1)` to both lines, drawn separately, so
/// the lines wander across each other.
#[derive(Clone, Debug)]
pub struct PairedWalk {
    rng: Lcg,
    x: i64,
    y1: f64,
    y2: f64,
    mu: f64,
    sigma: f64,
}

impl PairedWalk {
    #[must_use]
    pub fn new(rng: Lcg, start: f64, mu: f64, sigma: f64) -> Self {
        Self {
            rng,
            x: 0,
            y1: start,
            y2: start,
            mu,
            sigma,
        }
    }
}

impl Iterator for PairedWalk {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        let out = Sample::new(self.x, self.y1, self.y2);
        self.x += 1;
        self.y1 += self.sigma.mul_add(self.rng.randn(), self.mu);
        self.y2 += self.sigma.mul_add(self.rng.randn(), self.mu);
        Some(out)
    }
}
