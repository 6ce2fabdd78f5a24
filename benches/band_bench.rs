//! Partition, trim, snap and raster timings on long random walks.

use std::hint::black_box;

use band_graph::{
    BandModel, Config, Cutoff, PointSeries, build_segments, locate_nearest, rasterize_band,
    trim_segments,
    core::rng::{Lcg, PairedWalk},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

fn walk(n: usize) -> PointSeries {
    PairedWalk::new(Lcg::seed(0x5eed), 50.0, 0.0, 1.0).take(n).collect()
}

fn bench_build_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_segments");
    for n in SIZES {
        let series = walk(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, s| {
            b.iter(|| black_box(build_segments(black_box(s))));
        });
    }
    group.finish();
}

fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim_segments");
    for n in SIZES {
        let segs = build_segments(&walk(n));
        let mid = Cutoff::new(n as f64 / 2.0 + 0.5).ok();
        group.bench_with_input(BenchmarkId::new("midpoint", n), &segs, |b, s| {
            b.iter(|| black_box(trim_segments(black_box(s), mid)));
        });
        group.bench_with_input(BenchmarkId::new("none", n), &segs, |b, s| {
            b.iter(|| black_box(trim_segments(black_box(s), None)));
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let series = walk(1_000_000);
    c.bench_function("locate_nearest/1M", |b| {
        b.iter(|| black_box(locate_nearest(black_box(&series), black_box(654_321.4))));
    });
}

fn bench_probe_and_raster(c: &mut Criterion) {
    let model = BandModel::new(walk(100_000).to_vec());
    let (lo, hi) = model.series().y_bounds().unwrap_or((0.0, 1.0));
    let cfg = Config::builder(160, 40)
        .y_range(lo..=hi)
        .x_range(0.0, 99_999.0)
        .build()
        .expect("valid config");

    c.bench_function("probe_and_raster/100k", |b| {
        b.iter(|| {
            let probe = model.probe(Some(black_box(61_234.7))).expect("finite query");
            black_box(rasterize_band(&probe.trimmed, probe.selection, &cfg))
        });
    });
}

criterion_group!(benches, bench_build_segments, bench_trim, bench_nearest, bench_probe_and_raster);
criterion_main!(benches);
