//! Benchmarks for the two engine computations.

mod fourier;
mod synthesize;

pub use fourier::bench_fourier;
pub use synthesize::bench_synthesize;
