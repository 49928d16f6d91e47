//! Time grids and the sampled waveforms evaluated on them.

/// Evenly spaced, endpoint-inclusive time grids.
pub mod grid;
/// Sampled value sequences plus simple statistics.
pub mod waveform;

pub use grid::SampleGrid;
pub use waveform::Waveform;
