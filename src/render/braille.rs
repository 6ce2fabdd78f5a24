//! Trimmed band partition to coloured UTF-8 braille rows.
//!
//! ### Workflow
//! 1. `rasterize_band` walks the half-columns left to right (two per
//!    character cell) and samples the partition at each one's data-space x,
//!    giving the pixel span between the two lines and the side that owns it.
//!    A single forward cursor over segments and points keeps this linear.
//! 2. `encode_rows` turns those spans into braille cells, emitting a colour
//!    escape only when the owning side changes along a row.
//!
//! The intersection of a contiguous vertical span with a 4-dot cell is
//! always one of 11 patterns (empty, full, three triplets/pairs and four
//! single dots), so masks for each half are precomputed and looked up.

use crate::core::{
    color::{AnsiCode, Palette},
    config::Config,
    constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR, SPAN_EPSILON},
    model::Selection,
    segment::SegmentPoint,
    trim::TrimmedSegment,
};

/// Pixel rows covered by the band in one half-column; `top <= bottom`,
/// row 0 is the top of the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandColumn {
    pub top: usize,
    pub bottom: usize,
    pub is_first_above: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BandPlot {
    /// One entry per half-column; `None` where nothing is visible.
    pub columns: Vec<Option<BandColumn>>,
    /// Half-column of the current selection.
    pub marker: Option<usize>,
}

// --- Pre-Computed Masks ---

/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⡇), 2 top-three (⠇), 3 bottom-three(⡆), 4 top-two (⠃), 5 middle-two (⠆), 6 bottom-two (⡄),
/// 7 dot-zero (⠁), 8 dot-one (⠂), 9 dot-two (⠄), 10 dot-three (⡀)
const LEFT_MASKS: [u8; 11] = [
    0x00, 0x47, 0x07, 0x46, 0x03, 0x06, 0x44, 0x01, 0x02, 0x04, 0x40,
];
/// Same patterns for the right half (⢸ ⠸ ⢰ ⠘ ⠰ ⢠ ⠈ ⠐ ⠠ ⢀).
const RIGHT_MASKS: [u8; 11] = [
    0x00, 0xB8, 0x38, 0xB0, 0x18, 0x30, 0xA0, 0x08, 0x10, 0x20, 0x80,
];

const RESET_SEQ: &[u8] = b"\x1b[0m";

/// Map `(low, high)` --- pixel offsets inside a 4-row cell --- to the pattern id.
#[inline]
const fn pattern_id(low: usize, high: usize) -> usize {
    match (low, high) {
        (0, 3) => 1,
        (0, 2) => 2,
        (1, 3) => 3,
        (0, 1) => 4,
        (1, 2) => 5,
        (2, 3) => 6,
        (0, 0) => 7,
        (1, 1) => 8,
        (2, 2) => 9,
        (3, 3) => 10,
        _ => 0,
    }
}

// --- Sampling ---

/// Forward-only lookup of the band at increasing x.
struct Cursor<'s, 'a> {
    segments: &'s [TrimmedSegment<'a>],
    seg: usize,
    pt: usize,
}

impl<'s, 'a> Cursor<'s, 'a> {
    fn new(segments: &'s [TrimmedSegment<'a>]) -> Self {
        Self {
            segments,
            seg: 0,
            pt: 0,
        }
    }

    /// Band at `x`, which must not decrease between calls. Lone points
    /// (one-sample series) are hit from within `slack`.
    fn at(&mut self, x: f64, slack: f64) -> Option<(SegmentPoint, bool)> {
        loop {
            let seg = self.segments.get(self.seg)?;
            let pts = &seg.points;
            let (first, last) = (pts.first()?, pts.last()?);

            if pts.len() == 1 {
                if (x - first.x).abs() <= slack {
                    return Some((*first, seg.is_first_above));
                }
            } else if x >= first.x && x <= last.x {
                while self.pt + 2 < pts.len() && pts[self.pt + 1].x < x {
                    self.pt += 1;
                }
                let (a, b) = (&pts[self.pt], &pts[self.pt + 1]);
                let t = ((x - a.x) / (b.x - a.x).max(SPAN_EPSILON)).clamp(0.0, 1.0);
                return Some((a.lerp(b, t), seg.is_first_above));
            }

            if x < first.x {
                return None;
            }
            self.seg += 1;
            self.pt = 0;
        }
    }
}

/// Sample `trimmed` once per half-column over `config.x_range`.
///
/// Half-column `i` of `n` sits at `x_lo + i / (n - 1) * (x_hi - x_lo)`, so the
/// first and last columns land exactly on the range ends.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn rasterize_band(
    trimmed: &[TrimmedSegment<'_>],
    selection: Option<Selection>,
    config: &Config,
) -> BandPlot {
    let cols = config.x_chars * HR;
    let vert_px = config.y_chars * VR;
    if cols == 0 || vert_px == 0 {
        return BandPlot::default();
    }

    let (x_lo, x_hi) = config.x_range;
    let (y_lo, y_hi) = config.y_range;
    let x_span = x_hi - x_lo;
    let y_span = y_hi - y_lo; // > 0 by construction
    let step = if cols > 1 { x_span / (cols - 1) as f64 } else { 0.0 };

    // λ : ℝ → [0, vert_px-1], top row first
    let map = |y: f64| -> usize {
        let r = ((y - y_lo) / y_span).clamp(0.0, 1.0) * (vert_px - 1) as f64;
        (vert_px - 1) - r.round() as usize
    };

    let mut cursor = Cursor::new(trimmed);
    let columns = (0..cols)
        .map(|i| {
            let x = (i as f64).mul_add(step, x_lo);
            cursor.at(x, step / 2.0).map(|(p, is_first_above)| {
                let (a, b) = (map(p.y1), map(p.y2));
                BandColumn {
                    top: a.min(b),
                    bottom: a.max(b),
                    is_first_above,
                }
            })
        })
        .collect();

    let marker = selection.and_then(|sel| {
        let x = sel.x as f64;
        if x < x_lo || x > x_hi {
            return None;
        }
        let i = if step > 0.0 { ((x - x_lo) / step).round() as usize } else { 0 };
        Some(i.min(cols - 1))
    });

    BandPlot { columns, marker }
}

// --- Encoding ---

/// Pattern id and owning side of one half-column inside the cell spanning
/// pixel rows `top..=bottom`.
#[inline]
fn half_cell(column: Option<&BandColumn>, top: usize, bottom: usize) -> (usize, Option<bool>) {
    match column {
        Some(c) if c.bottom >= top && c.top <= bottom => (
            pattern_id(c.top.max(top) - top, c.bottom.min(bottom) - top),
            Some(c.is_first_above),
        ),
        _ => (0, None),
    }
}

/// Append the three UTF-8 bytes of braille cell `mask`.
///
/// U+2800 + mask always encodes as `E2 A0|(mask>>6) 80|(mask&0x3F)`.
#[inline]
fn push_cell(out: &mut Vec<u8>, mask: u8) {
    out.extend_from_slice(&[0xE2, 0xA0 | ((mask >> 6) & 0x03), 0x80 | (mask & 0x3F)]);
}

/// One byte row per character row, colour escapes included, no newline.
///
/// A cell takes the colour of its left half's side, falling back to the
/// right half; the selection marker is a full-height accent line.
#[must_use]
pub fn encode_rows(plot: &BandPlot, palette: &Palette, x_chars: usize, y_chars: usize) -> Vec<Vec<u8>> {
    let mut rows = Vec::with_capacity(y_chars);

    for row in 0..y_chars {
        let top = row * VR;
        let bottom = top + VR - 1;
        let mut line = Vec::with_capacity(x_chars * 3 + 32);
        let mut active: Option<&AnsiCode> = None;

        for col in 0..x_chars {
            let left = col * HR;
            let (lp, l_side) = half_cell(plot.columns.get(left).and_then(Option::as_ref), top, bottom);
            let (rp, r_side) = half_cell(plot.columns.get(left + 1).and_then(Option::as_ref), top, bottom);

            let mut mask = LEFT_MASKS[lp] | RIGHT_MASKS[rp];
            let mut color = l_side.or(r_side).map(|side| palette.side(side));

            if let Some(m) = plot.marker.filter(|m| m / HR == col) {
                mask |= if m % HR == 0 { LEFT_MASKS[1] } else { RIGHT_MASKS[1] };
                color = Some(&palette.accent);
            }

            if let Some(c) = color {
                if active != Some(c) {
                    line.extend_from_slice(c.as_str().as_bytes());
                    active = Some(c);
                }
            }
            push_cell(&mut line, mask);
        }

        if active.is_some() {
            line.extend_from_slice(RESET_SEQ);
        }
        rows.push(line);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{model::BandModel, series::Sample};

    fn config(x_chars: usize, y_chars: usize, x: (f64, f64), y: (f64, f64)) -> Config {
        Config::builder(x_chars, y_chars)
            .x_range(x.0, x.1)
            .y_range(y.0..=y.1)
            .build()
            .unwrap()
    }

    fn flat_model() -> BandModel {
        // first above for x <= 2, below after the crossing at 2.5
        BandModel::new(vec![
            Sample::new(0, 10.0, 0.0),
            Sample::new(2, 10.0, 0.0),
            Sample::new(3, 0.0, 10.0),
            Sample::new(5, 0.0, 10.0),
        ])
    }

    #[test]
    fn full_band_fills_every_column() {
        let m = flat_model();
        let cfg = config(3, 2, (0.0, 5.0), (0.0, 10.0));
        let plot = rasterize_band(&m.trimmed(None), None, &cfg);

        assert_eq!(plot.columns.len(), 6);
        assert!(plot.columns.iter().all(Option::is_some));
        // columns sit at x = 0, 1, 2, 3, 4, 5
        let sides: Vec<bool> = plot.columns.iter().flatten().map(|c| c.is_first_above).collect();
        assert_eq!(sides, [true, true, true, false, false, false]);
        let first = plot.columns[0].unwrap();
        assert_eq!((first.top, first.bottom), (0, 7));
    }

    #[test]
    fn cutoff_blanks_the_tail() {
        let m = flat_model();
        let cfg = config(3, 2, (0.0, 5.0), (0.0, 10.0));
        let probe = m.probe(Some(2.2)).unwrap();
        let plot = rasterize_band(&probe.trimmed, probe.selection, &cfg);

        assert!(plot.columns[..=2].iter().all(Option::is_some));
        assert!(plot.columns[3..].iter().all(Option::is_none));
        assert_eq!(plot.marker, Some(2));
    }

    #[test]
    fn lone_sample_hits_one_column() {
        let m = BandModel::new(vec![Sample::new(3, 4.0, 6.0)]);
        // columns at x = 0, 1, 2, 3
        let cfg = config(2, 1, (0.0, 3.0), (0.0, 10.0));
        let plot = rasterize_band(&m.trimmed(None), None, &cfg);
        assert_eq!(plot.columns.iter().filter(|c| c.is_some()).count(), 1);
        assert!(plot.columns[3].is_some());
    }

    #[test]
    fn encodes_colored_cells() {
        let plot = BandPlot {
            columns: vec![
                Some(BandColumn { top: 0, bottom: 3, is_first_above: true }),
                None,
                None,
                Some(BandColumn { top: 2, bottom: 3, is_first_above: false }),
            ],
            marker: None,
        };
        let palette = Palette::default();
        let rows = encode_rows(&plot, &palette, 2, 1);
        assert_eq!(rows.len(), 1);

        let mut want = Vec::new();
        want.extend_from_slice(b"\x1b[32m");
        want.extend_from_slice("⡇".as_bytes());
        want.extend_from_slice(b"\x1b[31m");
        want.extend_from_slice("⢠".as_bytes());
        want.extend_from_slice(RESET_SEQ);
        assert_eq!(rows[0], want);
    }

    #[test]
    fn marker_is_accent_line() {
        let plot = BandPlot {
            columns: vec![None; 4],
            marker: Some(1),
        };
        let palette = Palette::default();
        let rows = encode_rows(&plot, &palette, 2, 2);
        for row in &rows {
            let text = String::from_utf8(row.clone()).unwrap();
            assert!(text.contains(palette.accent.as_str()));
            assert!(text.contains('⢸'));
            assert!(text.ends_with("⠀\x1b[0m"));
        }
    }
}
