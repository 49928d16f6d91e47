pub mod config; // Session defaults: grids and initial controls
pub mod dsp;
pub mod engine; // Request/response layer over the evaluators
pub mod error;
pub mod fourier; // Truncated Fourier series
pub mod sampling;
pub mod synth; // Signal parameters and multi-signal synthesis

pub use config::PlotterConfig;
pub use dsp::WaveKind;
pub use error::{EngineError, EngineResult};
pub use fourier::{evaluate, FourierForm, FourierSpec, Fundamental, FundamentalKind};
pub use sampling::{SampleGrid, Waveform};
pub use synth::{synthesize, SignalControls, SignalSpec, Synthesis};
