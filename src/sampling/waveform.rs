#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::grid::SampleGrid;

/// A sampled sequence of values, one per grid point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Waveform {
    samples: Vec<f64>,
}

impl Waveform {
    /// Silence of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[inline]
    pub(crate) fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Pair each sample with its grid time, ready for a chart dataset.
    pub fn points(&self, grid: &SampleGrid) -> Vec<(f64, f64)> {
        grid.times().zip(self.samples.iter().copied()).collect()
    }

    /// Largest absolute sample, 0.0 when empty.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
    }

    /// Root mean square, 0.0 when empty.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        (self.samples.iter().map(|&x| x * x).sum::<f64>() / self.samples.len() as f64).sqrt()
    }

    /// `(min, max)` of the samples, `None` when empty.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }
}

impl From<Vec<f64>> for Waveform {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_empty_waveform() {
        let w = Waveform::default();
        assert_eq!(w.peak(), 0.0);
        assert_eq!(w.rms(), 0.0);
        assert_eq!(w.bounds(), None);
    }

    #[test]
    fn stats() {
        let w = Waveform::from(vec![1.0, -3.0, 1.0, 1.0]);
        assert_eq!(w.peak(), 3.0);
        assert_eq!(w.bounds(), Some((-3.0, 1.0)));
        assert!((w.rms() - 3.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn points_follow_grid() {
        let grid = SampleGrid::new(0.0, 2.0, 3);
        let w = Waveform::from(vec![5.0, 6.0, 7.0]);
        assert_eq!(w.points(&grid), vec![(0.0, 5.0), (1.0, 6.0), (2.0, 7.0)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn results_are_serializable() {
        fn assert_serde<T: Serialize + for<'de> Deserialize<'de>>() {}
        assert_serde::<Waveform>();
        assert_serde::<crate::synth::Synthesis>();
    }
}
