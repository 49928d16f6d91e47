// Purpose: per-signal parameters and multi-signal synthesis
// This layer maps parameter structs to sampled waveforms and their sum

/// Signal parameters and the integer controls that produce them.
pub mod signal;
/// Sampling signals on a grid and summing them.
pub mod synthesize;

pub use signal::{SignalControls, SignalParam, SignalSpec, CONTROL_SCALE};
pub use synthesize::{synthesize, Synthesis};
