//! Low-level signal math used by the synthesizer and the Fourier evaluator.
//!
//! These functions are pure and allocation-free: they fill caller-owned
//! buffers from closed-form expressions and keep no state between calls.

/// Signal summing and offsets.
pub mod mix;
/// Sine and cosine waveforms evaluated at absolute time.
pub mod oscillator;

pub use oscillator::WaveKind;
