//! Run-time configuration object + fluent builder.

use crate::core::{
    color::{AnsiCode, Palette},
    error::ConfigError,
};

/// Immutable parameters handed to the rasterizer and renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub subtitle: Option<String>,
    /// `(low, high)`, `low < high`.
    pub y_range: (f64, f64),
    /// Data-space x shown across the full width.
    pub x_range: (f64, f64),
    pub x_chars: usize,
    pub y_chars: usize,
    pub palette: Palette,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder(x_chars: usize, y_chars: usize) -> ConfigBuilder {
        ConfigBuilder::new(x_chars, y_chars)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    subtitle: Option<String>,
    y_min: Option<f64>,
    y_max: Option<f64>,
    x_range: Option<(f64, f64)>,
    palette: Palette,
}

impl ConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize) -> Self {
        Self {
            x_chars,
            y_chars,
            title: None,
            subtitle: None,
            y_min: None,
            y_max: None,
            x_range: None,
            palette: Palette::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle_opt(mut self, s: Option<String>) -> Self {
        if s.is_some() {
            self.subtitle = s;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn y_min(mut self, v: f64) -> Self {
        self.y_min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn y_max(mut self, v: f64) -> Self {
        self.y_max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn y_range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.y_min = Some(*r.start());
        self.y_max = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = Some((lo, hi));
        self
    }
    #[inline]
    #[must_use]
    pub fn above(mut self, c: AnsiCode) -> Self {
        self.palette.above = c;
        self
    }
    #[inline]
    #[must_use]
    pub fn below(mut self, c: AnsiCode) -> Self {
        self.palette.below = c;
        self
    }
    #[inline]
    #[must_use]
    pub fn accent(mut self, c: AnsiCode) -> Self {
        self.palette.accent = c;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let y_min = self.y_min.ok_or(ConfigError::MissingField("y_min"))?;
        let y_max = self.y_max.ok_or(ConfigError::MissingField("y_max"))?;
        let (x_lo, x_hi) = self.x_range.ok_or(ConfigError::MissingField("x_range"))?;

        for (name, v) in [("y_min", y_min), ("y_max", y_max), ("x_min", x_lo), ("x_max", x_hi)] {
            if !v.is_finite() {
                return Err(ConfigError::NonFiniteRange(name));
            }
        }
        if y_min >= y_max {
            return Err(ConfigError::InvalidRange {
                low: y_min,
                high: y_max,
            });
        }

        Ok(Config {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            y_range: (y_min, y_max),
            x_range: (x_lo.min(x_hi), x_lo.max(x_hi)),
            x_chars: self.x_chars,
            y_chars: self.y_chars,
            palette: self.palette,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let cfg = Config::builder(40, 10)
            .title("t")
            .y_range(0.0..=5.0)
            .x_range(3.0, 1.0)
            .build()
            .unwrap();
        assert_eq!(cfg.x_range, (1.0, 3.0));
        assert_eq!(cfg.palette, Palette::default());
        assert!(cfg.subtitle.is_none());
    }

    #[test]
    fn rejects_inverted_y() {
        let err = Config::builder(40, 10)
            .y_min(2.0)
            .y_max(2.0)
            .x_range(0.0, 1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { .. }));
    }

    #[test]
    fn rejects_missing_and_non_finite() {
        let err = Config::builder(40, 10).y_range(0.0..=1.0).build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("x_range")));

        let err = Config::builder(40, 10)
            .y_range(0.0..=f64::INFINITY)
            .x_range(0.0, 1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NonFiniteRange("y_max")));
    }
}
