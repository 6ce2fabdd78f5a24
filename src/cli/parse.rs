use clap::{Args, Parser, Subcommand};

use crate::core::color::AnsiCode;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "band-graph",
    version,
    about = "Two-series band plots in braille, coloured by which series is on top"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot an `x,y1,y2` CSV file
    Csv(CsvArgs),
    /// Print the segment partition of a CSV file as text
    Segments(SegmentsArgs),
    /// Animate the probe across a CSV file's x range
    Sweep(SweepArgs),
    /// Sweep across two random walks
    Demo(DemoArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Look of the plot, shared by every drawing subcommand.
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Graph title
    #[arg(short, long, default_value = "y1 vs y2")]
    pub title: String,

    /// Optional subtitle
    #[arg(short, long)]
    pub subtitle: Option<String>,

    /// Y-axis lower bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,
    /// Y-axis upper bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Band color where y1 >= y2 (name or `#RRGGBB`)
    #[arg(long, default_value = "green")]
    pub above: AnsiCode,
    /// Band color where y1 < y2
    #[arg(long, default_value = "red")]
    pub below: AnsiCode,
    /// Title, marker and readout color
    #[arg(long, default_value = "industrial")]
    pub accent: AnsiCode,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `band-graph csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Probe at this x: snaps to the nearest sample, cuts the band there
    /// and prints the readout
    #[arg(long, allow_negative_numbers = true)]
    pub probe: Option<f64>,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// `band-graph segments …`
#[derive(Parser, Debug)]
pub struct SegmentsArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Trim the partition at this x (no snapping)
    #[arg(long, allow_negative_numbers = true)]
    pub cutoff: Option<f64>,
}

/// `band-graph sweep …`
#[derive(Parser, Debug)]
pub struct SweepArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[arg(long, default_value_t = 30)]
    pub fps: u64,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// `band-graph demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 200)]
    pub steps: usize,
    #[arg(long, default_value_t = 50.0)]
    pub start: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mu: f64,
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,
    /// Fixed RNG seed (time-based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = 30)]
    pub fps: u64,

    #[command(flatten)]
    pub style: StyleArgs,
}
