#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    fourier::FourierForm,
    sampling::SampleGrid,
    synth::{SignalControls, SignalSpec},
};

/// Number of signal panels the plotter shows.
pub const SIGNAL_COUNT: usize = 3;

/// Everything a plotter session starts from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlotterConfig {
    /// Grid the individual signals and their sum are sampled on
    pub signal_grid: SampleGrid,
    /// Grid the Fourier series is sampled on
    pub fourier_grid: SampleGrid,
    /// Initial control state of each signal panel
    pub signals: [SignalControls; SIGNAL_COUNT],
    /// Initial contents of the Fourier form
    pub fourier: FourierForm,
}

impl PlotterConfig {
    /// Current specs of every panel, in panel order.
    pub fn signal_specs(&self) -> Vec<SignalSpec> {
        self.signals.iter().map(SignalControls::to_spec).collect()
    }
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            signal_grid: SampleGrid::SIGNALS,
            fourier_grid: SampleGrid::FOURIER,
            signals: [SignalControls::default(); SIGNAL_COUNT],
            fourier: FourierForm::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::WaveKind;

    #[test]
    fn defaults_match_reference_window() {
        let config = PlotterConfig::default();
        assert_eq!(config.signal_grid, SampleGrid::new(0.0, 1.0, 500));
        assert_eq!(config.fourier_grid, SampleGrid::new(0.0, 20.0, 2000));

        let specs = config.signal_specs();
        assert_eq!(specs.len(), 3);
        for spec in specs {
            assert_eq!(spec, SignalSpec::new(5.0, 5.0, 0.0, WaveKind::Cosine));
        }
        assert!(config.fourier.a0.is_empty());
    }
}
