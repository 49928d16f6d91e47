//! Benchmarks for multi-signal synthesis.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigscope::{synthesize, SampleGrid, SignalControls, WaveKind};

use crate::GRID_SIZES;

pub fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/synthesize");
    let specs: Vec<_> = [
        SignalControls::new(50, 50, 0, WaveKind::Cosine),
        SignalControls::new(30, 20, 90, WaveKind::Sine),
        SignalControls::new(80, 75, 180, WaveKind::Cosine),
    ]
    .iter()
    .map(SignalControls::to_spec)
    .collect();

    for &size in GRID_SIZES {
        let grid = SampleGrid::new(0.0, 1.0, size);

        // Three signals - the stock panel layout
        group.bench_with_input(BenchmarkId::new("three_signals", size), &size, |b, _| {
            b.iter(|| synthesize(black_box(&specs), black_box(&grid)))
        });

        // Single signal - cost of one oscillator pass plus the accumulate
        group.bench_with_input(BenchmarkId::new("one_signal", size), &size, |b, _| {
            b.iter(|| synthesize(black_box(&specs[..1]), black_box(&grid)))
        });
    }

    group.finish();
}
