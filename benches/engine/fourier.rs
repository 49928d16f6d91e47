//! Benchmarks for truncated Fourier series evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigscope::{evaluate, FourierForm, FourierSpec, Fundamental, FundamentalKind, SampleGrid};

use crate::GRID_SIZES;

fn spec_with(harmonics: usize) -> FourierSpec {
    let a_k = (1..=harmonics).map(|k| 1.0 / k as f64).collect();
    let b_k = (1..=harmonics).map(|k| 0.5 / k as f64).collect();
    FourierSpec::new(1.0, a_k, b_k, Fundamental::Period(2.0)).expect("valid bench spec")
}

pub fn bench_fourier(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/fourier");

    for &size in GRID_SIZES {
        let grid = SampleGrid::new(0.0, 20.0, size);

        // K = 3 - the stock form
        let spec = spec_with(3);
        group.bench_with_input(BenchmarkId::new("k3", size), &size, |b, _| {
            b.iter(|| evaluate(black_box(&spec), black_box(&grid)))
        });

        // K = 32 - cost grows linearly with harmonics
        let spec = spec_with(32);
        group.bench_with_input(BenchmarkId::new("k32", size), &size, |b, _| {
            b.iter(|| evaluate(black_box(&spec), black_box(&grid)))
        });
    }

    // Parse + validate + evaluate, as a plot request does it
    let form = FourierForm::new("1", "1, 0.5, 0.25", "0, 0.3, 0.1", FundamentalKind::W0, "3.14");
    group.bench_function("parse_and_evaluate", |b| {
        b.iter(|| {
            let spec = black_box(&form).parse().expect("valid bench form");
            evaluate(&spec, &SampleGrid::FOURIER)
        })
    });

    group.finish();
}
