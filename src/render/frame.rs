//! Full-screen band frame renderer with:
//! - cached chrome (top border/title, bottom axis/subtitle)
//! - per-row diff against the previous frame for `Delta` redraws
//! - a readout line under the frame, rewritten every frame

use std::io::{Write, stdout};

use crate::{
    core::{
        bounds::y_label_width,
        color::{AnsiCode, colorize},
        config::Config,
        constants::{DECIMAL_PRECISION, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH},
        error::GraphError,
    },
    render::braille::{BandPlot, encode_rows},
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
const CLEAR_LINE: &[u8] = b"\x1b[K";

/// Rows above the graph: title border + spacer.
const TOP_ROWS: usize = 2;
/// Rows below the graph: x labels + subtitle border.
const BOTTOM_ROWS: usize = 2;

// --- Helpers ---

/// Write centred coloured text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: &AnsiCode) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  ");
    buf.push_str(&colorize(color, text));
    buf.push(' ');
    buf.push_str(&H.repeat(pad_right));
}

/// `ESC[row;1H`, 1-based.
#[inline]
fn move_to(out: &mut impl Write, row: usize) -> std::io::Result<()> {
    write!(out, "\x1b[{row};1H")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Strategy {
    /// Replace every character in the graph
    Full,
    /// Replace only the rows that changed.
    Delta,
}

pub struct Renderer {
    strat: Strategy,
    first_frame: bool,

    chrome_top: Vec<u8>,
    chrome_bot: Vec<u8>,

    rows: Vec<Vec<u8>>,
    prev_rows: Vec<Vec<u8>>,

    cached_label_width: usize,
    cached_x: usize,
    cached_y: usize,
    cached_x_range: (f64, f64),
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn full() -> Self {
        Self::new(Strategy::Full)
    }
    #[inline]
    #[must_use]
    pub fn delta() -> Self {
        Self::new(Strategy::Delta)
    }

    fn new(strat: Strategy) -> Self {
        Self {
            strat,
            first_frame: true,
            chrome_top: Vec::new(),
            chrome_bot: Vec::new(),
            rows: Vec::new(),
            prev_rows: Vec::new(),
            cached_label_width: 0,
            cached_x: 0,
            cached_y: 0,
            cached_x_range: (0.0, 0.0),
        }
    }

    fn refresh_chrome(&mut self, cfg: &Config, label_width: usize) {
        let inner = cfg.x_chars + label_width + LABEL_GUTTER;
        let accent = &cfg.palette.accent;

        // --- top ---
        let mut top = String::new();
        top.push_str(TL);
        push_centered(&mut top, &cfg.title, inner, accent);
        top.push_str(TR);
        top.push('\n');

        top.push_str(V);
        top.push_str(&" ".repeat(inner));
        top.push_str(V);
        top.push('\n');

        self.chrome_top.clear();
        self.chrome_top.extend_from_slice(top.as_bytes());

        // --- bottom: x range under the band, then subtitle rule ---
        let (x_lo, x_hi) = cfg.x_range;
        let lo = format!("{x_lo:.0}");
        let hi = format!("{x_hi:.0}");
        let gap = cfg.x_chars.saturating_sub(lo.len() + hi.len());

        let mut bot = String::new();
        bot.push_str(V);
        bot.push_str(&" ".repeat(label_width + LABEL_GUTTER));
        if gap > 0 {
            bot.push_str(&lo);
            bot.push_str(&" ".repeat(gap));
            bot.push_str(&hi);
        } else {
            bot.push_str(&" ".repeat(cfg.x_chars));
        }
        bot.push_str(V);
        bot.push('\n');

        bot.push_str(BL);
        if let Some(sub) = &cfg.subtitle {
            push_centered(&mut bot, sub, inner, accent);
        } else {
            bot.push_str(&H.repeat(inner));
        }
        bot.push_str(BR);
        bot.push('\n');

        self.chrome_bot.clear();
        self.chrome_bot.extend_from_slice(bot.as_bytes());
    }

    /// Build every graph row (borders, labels, band) into `self.rows`.
    fn fill_graph_rows(
        &mut self,
        cfg: &Config,
        plot: &BandPlot,
        label_width: usize,
    ) -> Result<(), GraphError> {
        if cfg.x_chars < MIN_GRAPH_WIDTH || cfg.y_chars < MIN_GRAPH_HEIGHT {
            return Err(GraphError::GraphTooSmall {
                want_w: MIN_GRAPH_WIDTH,
                want_h: MIN_GRAPH_HEIGHT,
                got_w: cfg.x_chars,
                got_h: cfg.y_chars,
            });
        }

        let high_label = format!("{:.*}", DECIMAL_PRECISION, cfg.y_range.1);
        let low_label = format!("{:.*}", DECIMAL_PRECISION, cfg.y_range.0);
        let band = encode_rows(plot, &cfg.palette, cfg.x_chars, cfg.y_chars);

        std::mem::swap(&mut self.rows, &mut self.prev_rows);
        self.rows.clear();

        for (r, cells) in band.into_iter().enumerate() {
            let label = match r {
                0 => high_label.as_str(),
                r if r + 1 == cfg.y_chars => low_label.as_str(),
                _ => "",
            };
            let mut row = Vec::with_capacity(cells.len() + label_width + 2 * V.len() + LABEL_GUTTER);
            row.extend_from_slice(V.as_bytes());
            row.extend_from_slice(format!("{label:>label_width$}").as_bytes());
            row.extend(std::iter::repeat_n(b' ', LABEL_GUTTER));
            row.extend_from_slice(&cells);
            row.extend_from_slice(V.as_bytes());
            self.rows.push(row);
        }
        Ok(())
    }

    /// Indices of rows that differ from the previous frame; all of them when
    /// the shape changed.
    fn dirty_rows(&self) -> Vec<usize> {
        if self.prev_rows.len() != self.rows.len() {
            return (0..self.rows.len()).collect();
        }
        (0..self.rows.len())
            .filter(|&i| self.rows[i] != self.prev_rows[i])
            .collect()
    }

    /// Render to stdout.
    pub fn render(
        &mut self,
        config: &Config,
        plot: &BandPlot,
        readout: Option<&str>,
    ) -> Result<(), GraphError> {
        let mut term = stdout().lock();
        self.render_to(&mut term, config, plot, readout)
    }

    /// Main render entry, writing escape-sequence output to `out`.
    pub fn render_to<W: Write>(
        &mut self,
        out: &mut W,
        config: &Config,
        plot: &BandPlot,
        readout: Option<&str>,
    ) -> Result<(), GraphError> {
        let label_width = y_label_width(config.y_range, DECIMAL_PRECISION);

        let chrome_stale = self.chrome_top.is_empty()
            || self.cached_label_width != label_width
            || self.cached_x != config.x_chars
            || self.cached_y != config.y_chars
            || self.cached_x_range != config.x_range;

        if chrome_stale {
            self.refresh_chrome(config, label_width);
            self.cached_label_width = label_width;
            self.cached_x = config.x_chars;
            self.cached_y = config.y_chars;
            self.cached_x_range = config.x_range;
        }

        self.fill_graph_rows(config, plot, label_width)?;

        out.write_all(HIDE_CURSOR)?;
        if self.first_frame {
            out.write_all(b"\x1b[2J")?;
            self.first_frame = false;
        }

        if chrome_stale {
            move_to(out, 1)?;
            out.write_all(&self.chrome_top)?;
        }

        let graph_start_row = TOP_ROWS + 1;
        let dirty = match self.strat {
            Strategy::Delta if !chrome_stale => self.dirty_rows(),
            _ => (0..self.rows.len()).collect(),
        };
        // more than half dirty: one contiguous write is cheaper
        if dirty.len() * 2 > self.rows.len() {
            move_to(out, graph_start_row)?;
            for row in &self.rows {
                out.write_all(row)?;
                out.write_all(b"\n")?;
            }
        } else {
            for &i in &dirty {
                move_to(out, graph_start_row + i)?;
                out.write_all(&self.rows[i])?;
            }
        }

        let footer_row = graph_start_row + config.y_chars;
        if chrome_stale {
            move_to(out, footer_row)?;
            out.write_all(&self.chrome_bot)?;
        }

        move_to(out, footer_row + BOTTOM_ROWS)?;
        out.write_all(CLEAR_LINE)?;
        if let Some(text) = readout {
            out.write_all(colorize(&config.palette.accent, text).as_bytes())?;
        }
        out.write_all(b"\n")?;
        out.write_all(SHOW_CURSOR)?;
        out.flush()?;
        Ok(())
    }
}
