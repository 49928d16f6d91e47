#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{mix, oscillator},
    sampling::{SampleGrid, Waveform},
    synth::signal::SignalSpec,
};

/// Output of [`synthesize`]: one waveform per input signal plus their sum.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Synthesis {
    pub signals: Vec<Waveform>,
    pub sum: Waveform,
}

impl Synthesis {
    /// Number of waveforms a plot of this result shows (signals + sum).
    pub fn series_count(&self) -> usize {
        self.signals.len() + 1
    }
}

/// Sample every signal on `grid` and accumulate their pointwise sum.
///
/// Each signal is added into the sum as soon as it is rendered, so
/// `sum[i]` is exactly `0.0 + signals[0][i] + signals[1][i] + ...` in order.
/// An empty `specs` yields an all-zero sum.
pub fn synthesize(specs: &[SignalSpec], grid: &SampleGrid) -> Synthesis {
    let mut sum = Waveform::zeros(grid.len());
    let mut signals = Vec::with_capacity(specs.len());

    for spec in specs {
        let mut signal = Waveform::zeros(grid.len());
        oscillator::render(
            signal.samples_mut(),
            grid.times(),
            spec.amplitude,
            spec.frequency,
            spec.phase_degrees,
            spec.kind,
        );
        mix::sum_in_place(sum.samples_mut(), signal.samples());
        signals.push(signal);
    }

    Synthesis { signals, sum }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::WaveKind;

    #[test]
    fn empty_specs_give_silent_sum() {
        let out = synthesize(&[], &SampleGrid::SIGNALS);
        assert!(out.signals.is_empty());
        assert_eq!(out.sum.len(), 500);
        assert!(out.sum.samples().iter().all(|&s| s == 0.0));
        assert_eq!(out.series_count(), 1);
    }

    #[test]
    fn sum_matches_signals_exactly() {
        let specs = [
            SignalSpec::new(5.0, 5.0, 0.0, WaveKind::Cosine),
            SignalSpec::new(2.3, 7.1, 45.0, WaveKind::Sine),
            SignalSpec::new(9.9, 0.3, 359.0, WaveKind::Cosine),
        ];
        let out = synthesize(&specs, &SampleGrid::SIGNALS);

        for i in 0..out.sum.len() {
            let expected = out
                .signals
                .iter()
                .fold(0.0, |acc, signal| acc + signal.samples()[i]);
            assert_eq!(out.sum.samples()[i], expected, "sample {i}");
        }
    }

    #[test]
    fn phase_shifts_in_degrees() {
        let grid = SampleGrid::new(0.0, 0.0, 1);
        let out = synthesize(
            &[SignalSpec::sine(3.0, 1.0).with_phase(90.0)],
            &grid,
        );
        assert!((out.signals[0].samples()[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_grid_gives_empty_waveforms() {
        let grid = SampleGrid::new(0.0, 1.0, 0);
        let out = synthesize(&[SignalSpec::cosine(1.0, 1.0)], &grid);
        assert!(out.sum.is_empty());
        assert!(out.signals[0].is_empty());
    }
}
