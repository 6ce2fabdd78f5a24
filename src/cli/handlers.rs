use std::{
    io::Write,
    time::{Duration, Instant},
};

use crate::{
    core::{
        bounds::{Axis, graph_dims, terminal_geometry, y_label_width},
        config::Config,
        constants::DECIMAL_PRECISION,
        data::read_csv_from_path,
        error::GraphError,
        model::BandModel,
        rng::{Lcg, PairedWalk},
        series::Sample,
        trim::{Cutoff, trim_segments},
    },
    render::{Renderer, rasterize_band},
};

use super::parse::{CsvArgs, DemoArgs, SegmentsArgs, StyleArgs, SweepArgs};

fn load(file: &str, debug: bool) -> Result<BandModel, GraphError> {
    let t = Instant::now();
    let rows = read_csv_from_path(file)?;
    let n = rows.len();
    let model = BandModel::new(rows);
    if debug {
        eprintln!(
            "ingest + partition: {} µs   ({n} rows, {} segments)",
            t.elapsed().as_micros(),
            model.segments().len()
        );
    }
    Ok(model)
}

/// Size the plot to the terminal and the data.
pub fn config_for(model: &BandModel, style: &StyleArgs) -> Result<Config, GraphError> {
    if model.series().is_empty() {
        return Err(GraphError::EmptyData);
    }
    let (y_lo, y_hi) = Axis::Y.bounds(model.series());
    let (x_lo, x_hi) = Axis::X.bounds(model.series());
    let y_range = (style.y_min.unwrap_or(y_lo), style.y_max.unwrap_or(y_hi));

    let label_width = y_label_width(y_range, DECIMAL_PRECISION);
    let (x_chars, y_chars) = graph_dims(terminal_geometry(), label_width);

    Ok(Config::builder(x_chars, y_chars)
        .title(style.title.clone())
        .subtitle_opt(style.subtitle.clone())
        .y_min(y_range.0)
        .y_max(y_range.1)
        .x_range(x_lo, x_hi)
        .above(style.above)
        .below(style.below)
        .accent(style.accent)
        .build()?)
}

pub fn csv(a: &CsvArgs) -> Result<(), GraphError> {
    let model = load(&a.file, a.style.debug)?;
    let cfg = config_for(&model, &a.style)?;
    let t = Instant::now();
    let probe = model.probe(a.probe)?;
    let plot = rasterize_band(&probe.trimmed, probe.selection, &cfg);
    let readout = probe.readout(DECIMAL_PRECISION).map(|r| r.to_string());
    if a.style.debug {
        eprintln!("probe + raster: {} µs", t.elapsed().as_micros());
    }

    Renderer::full().render(&cfg, &plot, readout.as_deref())
}

pub fn segments(a: &SegmentsArgs) -> Result<(), GraphError> {
    let model = load(&a.file, false)?;
    let cutoff = a.cutoff.map(Cutoff::new).transpose()?;
    let trimmed = trim_segments(model.segments(), cutoff);

    let mut out = std::io::stdout().lock();
    for seg in &trimmed {
        let side = if seg.is_first_above { "y1 >= y2" } else { "y1 <  y2" };
        let cut = if seg.is_whole() { "" } else { "  (cut)" };
        writeln!(out, "segment {}  {side}  {} point(s){cut}", seg.index, seg.points.len())?;
        for p in seg.points.iter() {
            writeln!(out, "    x = {:>10.4}   y1 = {:>10.4}   y2 = {:>10.4}", p.x, p.y1, p.y2)?;
        }
    }
    if trimmed.is_empty() {
        writeln!(out, "(no visible segments)")?;
    }
    Ok(())
}

/// Step the selection through every sample, one frame each. The partition
/// is built once; every frame only re-probes it.
#[allow(clippy::cast_precision_loss)]
fn run_sweep(model: &BandModel, style: &StyleArgs, fps: u64) -> Result<(), GraphError> {
    let cfg = config_for(model, style)?;
    let mut renderer = Renderer::delta();
    let frame_pause = Duration::from_micros(1_000_000 / fps.max(1));

    let sweep_start = Instant::now();
    let mut total_probe_us: u128 = 0;
    let mut total_render_us: u128 = 0;
    let mut frames: u32 = 0;

    for sample in model.series().iter() {
        let t0 = Instant::now();
        let probe = model.probe(Some(sample.x as f64))?;
        let plot = rasterize_band(&probe.trimmed, probe.selection, &cfg);
        let readout = probe.readout(DECIMAL_PRECISION).map(|r| r.to_string());
        total_probe_us += t0.elapsed().as_micros();

        let t1 = Instant::now();
        renderer.render(&cfg, &plot, readout.as_deref())?;
        total_render_us += t1.elapsed().as_micros();
        frames += 1;

        std::thread::sleep(frame_pause);
    }

    if style.debug && frames > 0 {
        eprintln!(
            "sweep complete: {frames} frames   total {} µs\n   avg probe {:.1} µs   avg render {:.1} µs",
            sweep_start.elapsed().as_micros(),
            total_probe_us as f64 / f64::from(frames),
            total_render_us as f64 / f64::from(frames),
        );
    }
    Ok(())
}

pub fn sweep(a: &SweepArgs) -> Result<(), GraphError> {
    let model = load(&a.file, a.style.debug)?;
    run_sweep(&model, &a.style, a.fps)
}

pub fn demo(a: &DemoArgs) -> Result<(), GraphError> {
    let rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let samples: Vec<Sample> = PairedWalk::new(rng, a.start, a.mu, a.sigma)
        .take(a.steps)
        .collect();
    log::info!("demo: {} steps, μ = {}, σ = {}", samples.len(), a.mu, a.sigma);

    let mut style = a.style.clone();
    if style.subtitle.is_none() {
        style.subtitle = Some(format!("μ = {},  σ = {}", a.mu, a.sigma));
    }
    run_sweep(&BandModel::new(samples), &style, a.fps)
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    use crate::core::color::{AnsiCode, colorize};

    println!("\nPossible colors:");
    for (name, code) in [
        ("red", AnsiCode::red()),
        ("green", AnsiCode::green()),
        ("yellow", AnsiCode::yellow()),
        ("blue", AnsiCode::blue()),
        ("magenta", AnsiCode::magenta()),
        ("cyan", AnsiCode::cyan()),
        ("white", AnsiCode::white()),
        ("orange | industrial", AnsiCode::industrial_orange()),
    ] {
        println!("{}", colorize(&code, name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "band-graph";
    println!(
        "
Example invocations
-------------------
• Plot a CSV         : {bin} csv data.csv
• Probe at x = 42    : {bin} csv data.csv --probe 42
• Custom colors      : {bin} csv data.csv --above cyan --below #c04060
• Dump the partition : {bin} segments data.csv --cutoff 12.5
• Animated probe     : {bin} sweep data.csv --fps 20
• Random walks       : {bin} demo --steps 300 --sigma 2 --seed 7
• Debug logging      : RUST_LOG=debug {bin} csv data.csv --debug
"
    );
}
